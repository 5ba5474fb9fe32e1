//! Element-wise operations. All of them keep the original keys.

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Array, Key, Result, Value};

/// Apply `f` to every element.
pub fn map<F>(f: F) -> Transformer
where
    F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
{
    Transformer::named("map", move |value| {
        let out = value
            .into_array()
            .into_iter()
            .map(|(key, item)| Ok((key, f(item)?)))
            .collect::<Result<Array>>()?;
        Ok(Value::Array(out))
    })
}

fn retain<P>(value: Value, predicate: &P, keep: bool) -> Result<Value>
where
    P: Fn(&Value) -> Result<bool>,
{
    let mut out = Array::new();
    for (key, item) in value.into_array() {
        if predicate(&item)? == keep {
            out.insert(key, item);
        }
    }
    Ok(Value::Array(out))
}

/// Keep the elements for which `predicate` holds.
pub fn filter<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("filter", move |value| retain(value, &predicate, true))
}

/// Keep the elements for which `predicate` does not hold.
pub fn filter_not<P>(predicate: P) -> Transformer
where
    P: Fn(&Value) -> Result<bool> + Send + Sync + 'static,
{
    Transformer::named("filterNot", move |value| retain(value, &predicate, false))
}

/// Pluck `column` from every record.
///
/// With `column` of `None` the whole record is kept. Records that are not
/// arrays, or lack the column, are skipped. With `index_key` the result is
/// keyed by that field of each record; records without it get the next
/// positional key.
pub fn column(column: Option<Key>, index_key: Option<Key>) -> Transformer {
    Transformer::named("column", move |value| {
        let mut out = Array::new();
        for (_, record) in value.into_array() {
            let Value::Array(row) = record else {
                continue;
            };
            let key = index_key
                .as_ref()
                .and_then(|k| row.get(k))
                .and_then(Key::from_value);
            let picked = match &column {
                None => Value::Array(row),
                Some(c) => match row.get(c) {
                    Some(v) => v.clone(),
                    None => continue,
                },
            };
            match key {
                Some(key) => out.insert(key, picked),
                None => out.push(picked)?,
            }
        }
        Ok(Value::Array(out))
    })
}
