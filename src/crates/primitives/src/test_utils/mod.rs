//! Fixtures shared by the workspace's tests and benches.

use crate::array::Array;
use crate::value::Value;
use crate::array;

/// A list of integers.
pub fn ints(values: &[i64]) -> Value {
    Value::Array(values.iter().map(|n| Value::Int(*n)).collect())
}

/// A list of strings.
pub fn strs(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|s| Value::from(*s)).collect())
}

/// Two records `{a: 1, b: 2}` and `{a: 3, b: 4}`.
pub fn records() -> Value {
    Value::Array(array![array! {"a" => 1, "b" => 2}, array! {"a" => 3, "b" => 4}])
}

/// A keyed array built from `(key, int)` pairs.
pub fn keyed(pairs: &[(i64, i64)]) -> Value {
    let mut out = Array::new();
    for (key, value) in pairs {
        out.insert((*key).into(), Value::Int(*value));
    }
    Value::Array(out)
}

/// `0..len` as a list.
pub fn range(len: usize) -> Value {
    Value::Array((0..len as i64).map(Value::Int).collect())
}
