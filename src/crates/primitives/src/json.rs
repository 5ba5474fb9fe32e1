//! Conversion between [`Value`] and `serde_json::Value`.

use serde_json::{Map, Number};

use crate::array::Array;
use crate::key::Key;
use crate::value::Value;

impl Value {
    /// JSON view of the value. Lists become JSON arrays, keyed arrays become
    /// objects; non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) if arr.is_list() => {
                serde_json::Value::Array(arr.values().map(Value::to_json).collect())
            }
            Value::Array(arr) => {
                let mut map = Map::new();
                for (key, value) in arr.iter() {
                    map.insert(key.to_string(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Array(
                map.into_iter()
                    .map(|(k, v)| (Key::normalize(&k), Value::from(v)))
                    .collect::<Array>(),
            ),
        }
    }
}
