//! Pipeline steps.

use pipekit_primitives::{Array, Result, Value};

use crate::transformer::Transformer;

/// One element of a pipeline.
///
/// A `Call` step feeds the accumulator to its transformer. A `Literal` step
/// discards the accumulator and injects its own value.
#[derive(Debug, Clone)]
pub enum Step {
    Call(Transformer),
    Literal(Value),
}

impl Step {
    pub fn call<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Step::Call(Transformer::new(f))
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Step::Literal(value.into())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Call(t) => t.name(),
            Step::Literal(_) => "literal",
        }
    }

    /// Evaluate this step against the current accumulator.
    pub fn apply(&self, acc: Value) -> Result<Value> {
        match self {
            Step::Call(t) => t.apply(acc),
            Step::Literal(value) => Ok(value.clone()),
        }
    }
}

impl From<Transformer> for Step {
    fn from(t: Transformer) -> Self {
        Step::Call(t)
    }
}

impl From<Value> for Step {
    fn from(value: Value) -> Self {
        Step::Literal(value)
    }
}

impl From<Array> for Step {
    fn from(arr: Array) -> Self {
        Step::Literal(Value::Array(arr))
    }
}
