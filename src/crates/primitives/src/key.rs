//! Keys of an [`Array`](crate::array::Array).
//!
//! Keys are either positional (`Int`) or named (`Str`). A string that is the
//! canonical decimal spelling of an `i64` is normalised to `Int` on
//! construction, so `"3"` and `3` address the same entry.

use std::fmt;

use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Build a key from text, normalising canonical integers.
    pub fn normalize(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Key::Int(n),
            _ => Key::Str(s.to_owned()),
        }
    }

    /// Convert a value into a key, if it can be one.
    ///
    /// Arrays cannot be keys and yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Float(f) => Some(Key::Int(f.trunc() as i64)),
            Value::Str(s) => Some(Key::normalize(s)),
            Value::Array(_) => None,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(i64::from(n))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::normalize(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::normalize(&s)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => f.write_str(s),
        }
    }
}
