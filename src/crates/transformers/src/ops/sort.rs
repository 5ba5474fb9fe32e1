//! Sorting.
//!
//! Both factories run a stable merge sort that threads comparator errors out
//! instead of panicking, and both re-index the result.

use std::cmp::Ordering;

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Array, Result, Value};

fn merge_sorted<C>(left: Vec<Value>, right: Vec<Value>, cmp: &C) -> Result<Vec<Value>>
where
    C: Fn(&Value, &Value) -> Result<Ordering>,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => cmp(b, a)?.is_lt(),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
    Ok(out)
}

fn try_sort_by<C>(mut items: Vec<Value>, cmp: &C) -> Result<Vec<Value>>
where
    C: Fn(&Value, &Value) -> Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = try_sort_by(items, cmp)?;
    let right = try_sort_by(right, cmp)?;
    merge_sorted(left, right, cmp)
}

fn sorted<C>(value: Value, cmp: &C) -> Result<Value>
where
    C: Fn(&Value, &Value) -> Result<Ordering>,
{
    let items: Vec<Value> = value.into_array().into_values().collect();
    Ok(Value::Array(Array::list(try_sort_by(items, cmp)?)))
}

fn natural(a: &Value, b: &Value) -> Result<Ordering> {
    Ok(a.natural_cmp(b))
}

/// Sort ascending by natural order.
pub fn sort() -> Transformer {
    Transformer::named("sort", |value| sorted(value, &natural))
}

/// Sort ascending by `cmp`. Equal elements keep their input order.
pub fn sort_by<C>(cmp: C) -> Transformer
where
    C: Fn(&Value, &Value) -> Result<Ordering> + Send + Sync + 'static,
{
    Transformer::named("sort", move |value| sorted(value, &cmp))
}
