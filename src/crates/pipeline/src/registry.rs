//! Named transformer factories.
//!
//! The `Registry` maps a name to a factory: a function that takes the
//! configuration [`Args`] and returns a [`Transformer`]. Calling a name is an
//! explicit lookup in that table; unknown names are reported as
//! [`PipeError::UndefinedMethod`].
//!
//! A process-wide instance is available through [`Registry::global`] and the
//! free functions [`define`], [`undefine`] and [`call`]. It lives for the
//! process and starts empty.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use log::{debug, trace};

use pipekit_primitives::{PipeError, Result};

use crate::args::Args;
use crate::transformer::Transformer;

/// A factory producing a transformer from its configuration.
pub type Factory = Arc<dyn Fn(Args) -> Result<Transformer> + Send + Sync>;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Table of named factories.
///
/// A name maps to at most one factory; defining a name again replaces the
/// previous factory.
pub struct Registry {
    factories: RwLock<HashMap<String, Factory>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PipeError::invalid_argument("method name must not be empty"));
    }
    Ok(())
}

impl Registry {
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Register `factory` under `name`, replacing any previous factory.
    pub fn define<F>(&self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(Args) -> Result<Transformer> + Send + Sync + 'static,
    {
        let name = name.into();
        check_name(&name)?;

        let mut factories = self.factories.write().expect("lock poisoned");
        if factories.insert(name.clone(), Arc::new(factory)).is_some() {
            debug!("redefined method {}", name);
        } else {
            debug!("defined method {}", name);
        }
        Ok(())
    }

    /// Remove the factory registered under `name`.
    ///
    /// Removing a name that is not registered does nothing.
    pub fn undefine(&self, name: &str) -> Result<()> {
        check_name(name)?;

        let mut factories = self.factories.write().expect("lock poisoned");
        if factories.remove(name).is_some() {
            debug!("undefined method {}", name);
        }
        Ok(())
    }

    /// Look up a factory by name.
    pub fn get(&self, name: &str) -> Option<Factory> {
        let factories = self.factories.read().expect("lock poisoned");
        factories.get(name).cloned()
    }

    /// Call the factory registered under `name` with `args`.
    ///
    /// The factory runs after the table lock is released, so it may itself
    /// use the registry.
    pub fn call(&self, name: &str, args: Args) -> Result<Transformer> {
        let Some(factory) = self.get(name) else {
            debug!("call to undefined method {}", name);
            return Err(PipeError::UndefinedMethod(name.to_owned()));
        };
        trace!("calling method {} with {} argument(s)", name, args.len());
        factory(args)
    }

    pub fn contains(&self, name: &str) -> bool {
        let factories = self.factories.read().expect("lock poisoned");
        factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let factories = self.factories.read().expect("lock poisoned");
        let mut names: Vec<String> = factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        let factories = self.factories.read().expect("lock poisoned");
        factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}

/// [`Registry::define`] on the global registry.
pub fn define<F>(name: impl Into<String>, factory: F) -> Result<()>
where
    F: Fn(Args) -> Result<Transformer> + Send + Sync + 'static,
{
    Registry::global().define(name, factory)
}

/// [`Registry::undefine`] on the global registry.
pub fn undefine(name: &str) -> Result<()> {
    Registry::global().undefine(name)
}

/// [`Registry::call`] on the global registry.
pub fn call(name: &str, args: Args) -> Result<Transformer> {
    Registry::global().call(name, args)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pipekit_primitives::test_utils::ints;
    use pipekit_primitives::{Array, Value};

    use super::*;
    use crate::{args, pipe};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn add_n(args: Args) -> pipekit_primitives::Result<Transformer> {
        let n = args.value(0)?.as_int()?;
        Ok(Transformer::named("addN", move |data| {
            let out: Array = data
                .into_array()
                .into_values()
                .map(|v| Ok(Value::Int(v.as_int()? + n)))
                .collect::<pipekit_primitives::Result<_>>()?;
            Ok(Value::Array(out))
        }))
    }

    #[test]
    fn test_define_and_call() -> Result<()> {
        init_logger();
        let registry = Registry::new();
        registry.define("addN", add_n)?;
        assert!(registry.contains("addN"));
        assert_eq!(pipe!(ints(&[1, 2, 3]), registry.call("addN", args![2])?)?, ints(&[3, 4, 5]));
        Ok(())
    }

    #[test]
    fn test_define_replaces_previous_factory() -> Result<()> {
        let registry = Registry::new();
        registry.define("k", |_| Ok(Transformer::new(|_| Ok(Value::Int(1)))))?;
        registry.define("k", |_| Ok(Transformer::new(|_| Ok(Value::Int(2)))))?;
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.call("k", args![])?.apply(Value::Null)?, Value::Int(2));
        Ok(())
    }

    #[test]
    fn test_undefine_then_call_fails() -> Result<()> {
        init_logger();
        let registry = Registry::new();
        registry.define("addN", add_n)?;
        registry.undefine("addN")?;
        let err = registry.call("addN", args![2]).unwrap_err();
        assert!(err.is_undefined_method());
        assert_eq!(err.to_string(), "call to undefined method addN()");
        Ok(())
    }

    #[test]
    fn test_undefine_blank_name_is_invalid() {
        let registry = Registry::new();
        assert!(registry.undefine("").unwrap_err().is_invalid_argument());
        assert!(registry.undefine("   ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_define_blank_name_is_invalid() {
        let registry = Registry::new();
        let err = registry
            .define("", |_| Ok(Transformer::new(Ok)))
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_undefine_unknown_name_is_noop() -> Result<()> {
        let registry = Registry::new();
        registry.undefine("never-defined")?;
        assert!(registry.is_empty());
        Ok(())
    }

    #[test]
    fn test_factory_errors_propagate() {
        let registry = Registry::new();
        registry.define("addN", add_n).unwrap();
        let err = registry.call("addN", args!["two"]).unwrap_err();
        assert!(matches!(err, PipeError::Type { expected: "int", .. }));
        let err = registry.call("addN", args![]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_variadic_factory() -> Result<()> {
        let registry = Registry::new();
        registry.define("addVariadic", |args: Args| {
            let total = args
                .values()
                .map(Value::as_int)
                .sum::<pipekit_primitives::Result<i64>>()?;
            add_n(args![total])
        })?;
        let t = registry.call("addVariadic", args![1, 2, 3, 4])?;
        assert_eq!(t.apply(ints(&[1, 2, 3]))?, ints(&[11, 12, 13]));
        Ok(())
    }

    #[test]
    fn test_factory_may_use_the_registry() -> Result<()> {
        let registry = Arc::new(Registry::new());
        registry.define("addN", add_n)?;
        let inner = Arc::clone(&registry);
        registry.define("addTwice", move |args: Args| {
            let first = inner.call("addN", args.clone())?;
            let second = inner.call("addN", args)?;
            Ok(first.then(second))
        })?;
        let t = registry.call("addTwice", args![5])?;
        assert_eq!(t.apply(ints(&[1]))?, ints(&[11]));
        Ok(())
    }

    #[test]
    fn test_names_are_sorted() -> Result<()> {
        let registry = Registry::new();
        registry.define("b", |_| Ok(Transformer::new(Ok)))?;
        registry.define("a", |_| Ok(Transformer::new(Ok)))?;
        assert_eq!(registry.names(), vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(format!("{:?}", registry), r#"Registry { names: ["a", "b"] }"#);
        Ok(())
    }

    #[test]
    fn test_global_free_functions() -> Result<()> {
        define("registryTestSum", |_| {
            Ok(Transformer::new(|data| {
                let sum = data
                    .into_array()
                    .into_values()
                    .map(|v| v.as_int())
                    .sum::<pipekit_primitives::Result<i64>>()?;
                Ok(Value::Int(sum))
            }))
        })?;
        assert!(Registry::global().contains("registryTestSum"));
        assert_eq!(pipe!(ints(&[1, 2, 3]), call("registryTestSum", args![])?)?, Value::Int(6));
        undefine("registryTestSum")?;
        assert!(call("registryTestSum", args![]).unwrap_err().is_undefined_method());
        Ok(())
    }
}
