//! Core data types for pipekit.
//!
//! [`Value`] is the datum that flows through a pipeline and [`Array`] is its
//! ordered keyed collection. Every fallible operation in the workspace
//! reports a [`PipeError`].

pub mod array;
pub mod error;
pub mod json;
pub mod key;
pub mod order;
pub mod value;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use array::Array;
pub use error::{PipeError, Result};
pub use key::Key;
pub use value::Value;
