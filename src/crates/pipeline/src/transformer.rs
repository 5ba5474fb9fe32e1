//! Unary value transformers.

use std::fmt;
use std::sync::Arc;

use pipekit_primitives::{Result, Value};

type TransformFn = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// A shared unary function `Value -> Result<Value>`.
///
/// Cloning is cheap: only the `Arc` is cloned, never the closure. A
/// transformer is stateless unless its closure captures state.
#[derive(Clone)]
pub struct Transformer {
    name: &'static str,
    f: Arc<TransformFn>,
}

impl Transformer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::named("closure", f)
    }

    /// Create a transformer with a name that shows up in logs and `Debug`.
    pub fn named<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name,
            f: Arc::new(f),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, value: Value) -> Result<Value> {
        (self.f)(value)
    }

    /// `self` followed by `next`.
    pub fn then(self, next: Transformer) -> Transformer {
        Transformer::named("composed", move |value| next.apply(self.apply(value)?))
    }
}

impl fmt::Debug for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformer")
            .field("name", &self.name)
            .finish()
    }
}
