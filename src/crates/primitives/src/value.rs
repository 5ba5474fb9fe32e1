//! The datum that flows through a pipeline.

use std::fmt;

use crate::array::Array;
use crate::error::{PipeError, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Array),
}

impl Value {
    /// Short name of the variant, used in type errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    fn type_error(&self, expected: &'static str) -> PipeError {
        PipeError::Type {
            expected,
            found: self.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.type_error("int")),
        }
    }

    /// Numeric view; ints widen to floats.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Int(n) => Ok(*n as f64),
            Value::Float(f) => Ok(*f),
            other => Err(other.type_error("number")),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.type_error("bool")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.type_error("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.type_error("array")),
        }
    }

    /// Apply the wrap rule: arrays pass through, anything else becomes a
    /// one-element list.
    pub fn into_array(self) -> Array {
        match self {
            Value::Array(arr) => arr,
            other => Array::list([other]),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Array(arr) => !arr.is_empty(),
        }
    }

    /// Textual form of a scalar. Arrays have none.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::Null | Value::Bool(false) => Ok(String::new()),
            Value::Bool(true) => Ok("1".to_owned()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(f) => Ok(format_float(*f)),
            Value::Str(s) => Ok(s.clone()),
            Value::Array(_) => Err(self.type_error("scalar")),
        }
    }
}

pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

impl PartialEq<Array> for Value {
    fn eq(&self, other: &Array) -> bool {
        matches!(self, Value::Array(arr) if arr == other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn test_wrap_rule() {
        assert_eq!(Value::Int(3).into_array(), array![3]);
        assert_eq!(Value::Null.into_array(), array![Value::Null]);
        assert_eq!(Value::from(array![1, 2]).into_array(), array![1, 2]);
    }

    #[test]
    fn test_truthiness() {
        for falsy in [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::Float(0.0),
            Value::from(""),
            Value::from("0"),
            Value::from(Array::new()),
        ] {
            assert!(!falsy.is_truthy(), "{:?} should be falsy", falsy);
        }
        for truthy in [
            Value::Bool(true),
            Value::Int(-1),
            Value::from("0.0"),
            Value::from(" "),
            Value::from(array![0]),
        ] {
            assert!(truthy.is_truthy(), "{:?} should be truthy", truthy);
        }
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Int(12).to_text().unwrap(), "12");
        assert_eq!(Value::Float(2.0).to_text().unwrap(), "2");
        assert_eq!(Value::Float(2.5).to_text().unwrap(), "2.5");
        assert_eq!(Value::Bool(true).to_text().unwrap(), "1");
        assert_eq!(Value::Null.to_text().unwrap(), "");
        assert!(matches!(
            Value::from(array![1]).to_text(),
            Err(PipeError::Type { found: "array", .. })
        ));
    }

    #[test]
    fn test_accessor_type_errors() {
        let err = Value::from("x").as_int().unwrap_err();
        assert_eq!(err.to_string(), "expected int, found string");
        assert_eq!(Value::Int(2).as_float().unwrap(), 2.0);
    }

    #[test]
    fn test_option_and_vec_conversions() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
        assert_eq!(Value::from(vec![1, 2]), array![1, 2]);
    }
}
