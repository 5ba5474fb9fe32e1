//! Folds and membership predicates.

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Result, Value};

/// Left fold `f(carry, item)` starting from `initial`.
pub fn reduce<F>(f: F, initial: impl Into<Value>) -> Transformer
where
    F: Fn(Value, Value) -> Result<Value> + Send + Sync + 'static,
{
    let initial = initial.into();
    Transformer::named("reduce", move |value| {
        value
            .into_array()
            .into_values()
            .try_fold(initial.clone(), |carry, item| f(carry, item))
    })
}

fn any_match<P>(value: Value, predicate: &P) -> Result<bool>
where
    P: Fn(&Value) -> Result<bool>,
{
    for item in value.into_array().values() {
        if predicate(item)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True when the collection is non-empty and every element satisfies
/// `predicate`.
pub fn all<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("all", move |value| {
        let items = value.into_array();
        if items.is_empty() {
            return Ok(Value::Bool(false));
        }
        for item in items.values() {
            if !predicate(item)? {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    })
}

/// True when some element satisfies `predicate`.
pub fn any<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("any", move |value| Ok(Value::Bool(any_match(value, &predicate)?)))
}

/// Alias of [`any`].
pub fn some<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("some", move |value| Ok(Value::Bool(any_match(value, &predicate)?)))
}

/// True when no element satisfies `predicate`. Empty collections pass.
pub fn none<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("none", move |value| Ok(Value::Bool(!any_match(value, &predicate)?)))
}
