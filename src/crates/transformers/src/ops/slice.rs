//! Positional slicing.
//!
//! A non-negative count works from the front, a negative one from the back.
//! Without key preservation, positional keys are renumbered from zero and
//! named keys are kept.

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Array, Value};

fn take_slice(items: Array, n: i64, preserve_keys: bool) -> Array {
    if n >= 0 {
        items.slice(0, Some(n), preserve_keys)
    } else {
        items.slice(n, None, preserve_keys)
    }
}

fn skip_slice(items: Array, n: i64, preserve_keys: bool) -> Array {
    if n >= 0 {
        items.slice(n, None, preserve_keys)
    } else {
        items.slice(0, Some(n), preserve_keys)
    }
}

/// The first `n` elements, or the last `|n|` when `n` is negative.
pub fn take(n: i64) -> Transformer {
    Transformer::named("take", move |value| {
        Ok(Value::Array(take_slice(value.into_array(), n, false)))
    })
}

/// [`take`] keeping the original keys.
pub fn take_preserve_keys(n: i64) -> Transformer {
    Transformer::named("take", move |value| {
        Ok(Value::Array(take_slice(value.into_array(), n, true)))
    })
}

/// Everything but the first `n` elements, or but the last `|n|` when `n` is
/// negative.
pub fn skip(n: i64) -> Transformer {
    Transformer::named("skip", move |value| {
        Ok(Value::Array(skip_slice(value.into_array(), n, false)))
    })
}

/// [`skip`] keeping the original keys.
pub fn skip_preserve_keys(n: i64) -> Transformer {
    Transformer::named("skip", move |value| {
        Ok(Value::Array(skip_slice(value.into_array(), n, true)))
    })
}
