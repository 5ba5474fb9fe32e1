//! Ready-made transformer factories.
//!
//! [`ops`] holds the factories as plain Rust functions. [`builtins`] exposes
//! the same factories by name so they can be looked up in a
//! [`Registry`](pipekit_pipeline::Registry).

pub mod builtins;
pub mod ops;


pub use ops::*;
