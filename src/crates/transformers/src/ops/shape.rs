//! Operations that change the shape of a collection rather than its
//! elements.

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Array, Value};

fn flatten_into(out: &mut Vec<Value>, value: Value) {
    match value {
        Value::Array(items) => {
            for item in items.into_values() {
                flatten_into(out, item);
            }
        }
        other => out.push(other),
    }
}

/// Flatten nested arrays to any depth into a list. Keys are discarded.
pub fn flat() -> Transformer {
    Transformer::named("flat", |value| {
        let mut out = Vec::new();
        flatten_into(&mut out, Value::Array(value.into_array()));
        Ok(Value::Array(Array::list(out)))
    })
}

/// Renumber the keys `0..n`, keeping the order.
pub fn values() -> Transformer {
    Transformer::named("values", |value| Ok(Value::Array(value.into_array().reindexed())))
}

/// Merge the input with each of `collections` in turn.
///
/// Positional entries are appended and renumbered; named entries overwrite
/// earlier ones with the same key. Scalars are wrapped first.
pub fn merge<I, V>(collections: I) -> Transformer
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let collections: Vec<Array> = collections
        .into_iter()
        .map(|c| c.into().into_array())
        .collect();
    Transformer::named("merge", move |value| {
        let mut out = Array::new();
        out.append_merge(value.into_array())?;
        for other in &collections {
            out.append_merge(other.clone())?;
        }
        Ok(Value::Array(out))
    })
}

/// Append each of `items` as a single element. Arrays are nested, not
/// spread.
///
/// Fails with `InvalidArgument` when the input already holds the key
/// `i64::MAX`, as there is no index left to append under.
pub fn push<I, V>(items: I) -> Transformer
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let items: Vec<Value> = items.into_iter().map(Into::into).collect();
    Transformer::named("push", move |value| {
        let mut out = value.into_array();
        for item in &items {
            out.push(item.clone())?;
        }
        Ok(Value::Array(out))
    })
}
