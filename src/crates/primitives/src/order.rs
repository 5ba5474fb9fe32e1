//! Natural ordering of values, used by `sort()`.

use std::cmp::Ordering;

use crate::value::{Value, format_float};

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(Ordering::Equal),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

/// Parse a string that looks like a number, allowing surrounding whitespace.
fn numeric_str(s: &str) -> Option<Number> {
    let trimmed = s.trim();
    let first = trimmed.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '+' | '-' | '.')) {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Number::Int(n));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}

fn number(value: &Value) -> Option<Number> {
    match value {
        Value::Int(n) => Some(Number::Int(*n)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) | Value::Str(_) => 2,
        Value::Array(_) => 3,
    }
}

impl Value {
    /// Total ordering used for ascending sorts.
    ///
    /// Numbers and numeric strings compare numerically, other strings
    /// bytewise, arrays by length and then position by position. Values of
    /// unrelated kinds fall back to `null < bool < scalar < array`.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.values()
                    .zip(b.values())
                    .map(|(x, y)| x.natural_cmp(y))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (Value::Str(a), Value::Str(b)) => match (numeric_str(a), numeric_str(b)) {
                (Some(x), Some(y)) => x.cmp(y),
                _ => a.as_bytes().cmp(b.as_bytes()),
            },
            (Value::Str(s), _) if number(other).is_some() => {
                other.natural_cmp(&Value::Str(s.clone())).reverse()
            }
            _ => match (number(self), number(other)) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(a), None) => match other {
                    Value::Str(s) => match numeric_str(s) {
                        Some(b) => a.cmp(b),
                        None => number_text(a).as_bytes().cmp(s.as_bytes()),
                    },
                    _ => rank(self).cmp(&rank(other)),
                },
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

fn number_text(n: Number) -> String {
    match n {
        Number::Int(i) => i.to_string(),
        Number::Float(f) => format_float(f),
    }
}
