//! Pipe evaluation engine and factory registry.
//!
//! A pipeline is a value threaded through an ordered list of [`Step`]s. Steps
//! are either [`Transformer`]s or literal values that replace the
//! accumulator. Named transformer factories live in a [`Registry`].
//!
//! # Example
//!
//! ```
//! use pipekit_pipeline::{Transformer, Value, pipe};
//!
//! let double = Transformer::new(|v| Ok(Value::Int(v.as_int()? * 2)));
//! let out = pipe!(21, double).unwrap();
//! assert_eq!(out, Value::Int(42));
//! ```

pub mod args;
pub mod engine;
pub mod registry;
pub mod step;
pub mod transformer;

pub use args::{Arg, Args, Callback};
pub use engine::{Pipe, pipe};
pub use registry::{Factory, Registry, call, define, undefine};
pub use step::Step;
pub use transformer::Transformer;

pub use pipekit_primitives::{Array, Key, PipeError, Result, Value};
