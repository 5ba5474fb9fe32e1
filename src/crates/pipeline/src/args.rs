//! Configuration arguments handed to registered factories.

use std::fmt;
use std::sync::Arc;

use pipekit_primitives::{Array, PipeError, Result, Value};

/// An n-ary callback passed to a factory by name, e.g. the mapping function
/// of `map` or the comparator of `sort`.
pub type Callback = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// A single factory argument: a plain value or a callback.
#[derive(Clone)]
pub enum Arg {
    Value(Value),
    Func(Callback),
}

impl Arg {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Arg::Func(Arc::new(f))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Arg::Value(v) => Some(v),
            Arg::Func(_) => None,
        }
    }

    pub fn as_func(&self) -> Option<&Callback> {
        match self {
            Arg::Func(f) => Some(f),
            Arg::Value(_) => None,
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Arg::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<Callback> for Arg {
    fn from(f: Callback) -> Self {
        Arg::Func(f)
    }
}

macro_rules! arg_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::Value(Value::from(v))
                }
            }
        )*
    };
}

arg_from_value!(bool, i32, i64, f64, &str, String, Array);

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::Value(Value::from(values))
    }
}

/// Ordered, variadic factory configuration.
#[derive(Debug, Clone, Default)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: impl Into<Arg>) {
        self.0.push(arg.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arg> {
        self.0.iter()
    }

    /// The plain values among the arguments, in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().filter_map(Arg::as_value)
    }

    /// The value at `index`; missing arguments and callbacks are errors.
    pub fn value(&self, index: usize) -> Result<&Value> {
        match self.0.get(index) {
            Some(Arg::Value(v)) => Ok(v),
            Some(Arg::Func(_)) => Err(PipeError::invalid_argument(format!(
                "argument #{} must be a value, got a callback",
                index + 1
            ))),
            None => Err(PipeError::invalid_argument(format!(
                "missing argument #{}",
                index + 1
            ))),
        }
    }

    /// The value at `index`, or `default` if the argument was not given.
    pub fn value_or(&self, index: usize, default: Value) -> Result<Value> {
        match self.0.get(index) {
            None => Ok(default),
            Some(_) => self.value(index).cloned(),
        }
    }

    /// The callback at `index`.
    pub fn func(&self, index: usize) -> Result<Callback> {
        match self.0.get(index) {
            Some(Arg::Func(f)) => Ok(Arc::clone(f)),
            Some(Arg::Value(_)) => Err(PipeError::invalid_argument(format!(
                "argument #{} must be a callback",
                index + 1
            ))),
            None => Err(PipeError::invalid_argument(format!(
                "missing argument #{}",
                index + 1
            ))),
        }
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self(args)
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Args {
    type Item = Arg;
    type IntoIter = std::vec::IntoIter<Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build [`Args`]: `args![2, "x", Arg::func(..)]`.
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        $crate::Args::from(args)
    }};
}
