//! Pipe evaluation.
//!
//! Evaluation is a strict left fold over the steps:
//! - a `Call` step replaces the accumulator with its transformer's output
//! - a `Literal` step replaces the accumulator with the literal
//!
//! The first failing step aborts the fold and its error is returned as-is;
//! later steps never run.

use log::trace;

use pipekit_primitives::{Result, Value};

use crate::step::Step;
use crate::transformer::Transformer;

/// Thread `value` through `steps`, left to right.
///
/// With no steps the value is returned unchanged.
pub fn pipe<I>(value: impl Into<Value>, steps: I) -> Result<Value>
where
    I: IntoIterator<Item = Step>,
{
    Pipe::from_steps(steps).run(value)
}

/// Variadic form of [`pipe()`]: `pipe!(value, step, step, ...)`.
///
/// Each step may be anything that converts into a [`Step`].
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $step:expr)* $(,)?) => {{
        let steps: ::std::vec::Vec<$crate::Step> = ::std::vec![$($crate::Step::from($step)),*];
        $crate::pipe($value, steps)
    }};
}

/// A reusable pipeline.
///
/// `Pipe` is the callable form of the engine: it owns its steps, runs them
/// with [`Pipe::run`], and converts into a [`Transformer`] so that a pipeline
/// can itself be a step of another pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipe {
    steps: Vec<Step>,
}

impl Pipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Method form of [`pipe()`].
    pub fn pipe<I>(value: impl Into<Value>, steps: I) -> Result<Value>
    where
        I: IntoIterator<Item = Step>,
    {
        pipe(value, steps)
    }

    /// Append a step.
    pub fn then(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn run(&self, value: impl Into<Value>) -> Result<Value> {
        let mut acc = value.into();
        for (index, step) in self.steps.iter().enumerate() {
            trace!("pipe step {}: {}", index, step.name());
            acc = step.apply(acc)?;
        }
        Ok(acc)
    }

    pub fn into_transformer(self) -> Transformer {
        Transformer::named("pipe", move |value| self.run(value))
    }
}

impl From<Pipe> for Transformer {
    fn from(pipe: Pipe) -> Self {
        pipe.into_transformer()
    }
}

impl From<Pipe> for Step {
    fn from(pipe: Pipe) -> Self {
        Step::Call(pipe.into_transformer())
    }
}
