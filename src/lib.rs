//! Functional data pipelines.
//!
//! A value is threaded through an ordered list of steps, each step seeing the
//! previous step's output. Steps are [`Transformer`]s built from the
//! factories in [`ops`], from ad hoc closures, or looked up by name in a
//! [`Registry`].
//!
//! ```
//! use pipekit::prelude::*;
//!
//! let out = pipe!(
//!     array![3, 1, 2],
//!     map(|n| Ok(Value::Int(n.as_int()? * 10))),
//!     sort(),
//!     join(",")
//! )
//! .unwrap();
//! assert_eq!(out, Value::from("10,20,30"));
//! ```
//!
//! Nothing is installed globally unless asked for: [`install`] defines the
//! built-in factories by name in [`Registry::global`].

pub use pipekit_pipeline::{
    Arg, Args, Callback, Factory, Pipe, Registry, Step, Transformer, args, call, define, pipe,
    undefine,
};
pub use pipekit_primitives::{Array, Key, PipeError, Result, Value, array};
pub use pipekit_transformers::{builtins, ops};

/// The pipe entry point alone: `use pipekit::global::*;`.
pub mod global {
    pub use pipekit_pipeline::{Pipe, Step, pipe};
}

/// The entry point, every built-in factory and the registry functions.
pub mod prelude {
    pub use pipekit_pipeline::{
        Arg, Args, Pipe, Registry, Step, Transformer, args, call, define, pipe, undefine,
    };
    pub use pipekit_primitives::{Array, Key, PipeError, Value, array};
    pub use pipekit_transformers::ops::{
        all, any, column, explode, explode_limit, filter, filter_not, flat, implode, join, map,
        merge, none, push, reduce, skip, skip_preserve_keys, some, sort, sort_by, tap, take,
        take_preserve_keys, values,
    };
}

/// Define every built-in factory by name in the global registry.
///
/// Safe to call more than once; later calls replace the earlier definitions,
/// including user factories registered under a built-in name.
pub fn install() -> Result<()> {
    builtins::install(Registry::global())
}
