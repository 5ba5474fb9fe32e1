//! Built-in transformer factories.
//!
//! Every factory returns a [`Transformer`](pipekit_pipeline::Transformer).
//! Factories that work on a collection first apply the wrap rule: a value
//! that is not an array is treated as a one-element list.
//!
//! - Observation: `tap`
//! - Element-wise: `map`, `filter`, `filter_not`, `column`
//! - Folds and predicates: `reduce`, `all`, `any`, `some`, `none`
//! - Shape: `flat`, `values`, `merge`, `push`
//! - Slicing: `take`, `skip`
//! - Ordering: `sort`, `sort_by`
//! - Text: `explode`, `implode`, `join`

pub mod fold;
pub mod map;
pub mod shape;
pub mod slice;
pub mod sort;
pub mod tap;
pub mod text;

pub use fold::{all, any, none, reduce, some};
pub use map::{column, filter, filter_not, map};
pub use shape::{flat, merge, push, values};
pub use slice::{skip, skip_preserve_keys, take, take_preserve_keys};
pub use sort::{sort, sort_by};
pub use tap::tap;
pub use text::{explode, explode_limit, implode, join};
