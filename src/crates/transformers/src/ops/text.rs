//! Splitting and joining text.

use pipekit_pipeline::Transformer;
use pipekit_primitives::{Array, PipeError, Result, Value};

fn split(text: &str, separator: &str, limit: i64) -> Result<Array> {
    if separator.is_empty() {
        return Err(PipeError::invalid_argument("explode separator must not be empty"));
    }
    let pieces: Vec<&str> = match limit {
        l if l > 0 => {
            let n = usize::try_from(l).unwrap_or(usize::MAX);
            text.splitn(n, separator).collect()
        }
        0 => vec![text],
        l => {
            let mut all: Vec<&str> = text.split(separator).collect();
            let drop = usize::try_from(l.unsigned_abs()).unwrap_or(usize::MAX);
            all.truncate(all.len().saturating_sub(drop));
            all
        }
    };
    Ok(pieces.into_iter().map(Value::from).collect())
}

/// Split the text form of the input on `separator`.
pub fn explode(separator: impl Into<String>) -> Transformer {
    explode_limit(separator, i64::MAX)
}

/// Split with a piece limit.
///
/// A positive `limit` caps the number of pieces, the last one holding the
/// rest of the text. A negative `limit` drops that many pieces from the end.
/// Zero behaves as one. An empty separator fails when applied.
pub fn explode_limit(separator: impl Into<String>, limit: i64) -> Transformer {
    let separator = separator.into();
    Transformer::named("explode", move |value| {
        let text = value.to_text()?;
        Ok(Value::Array(split(&text, &separator, limit)?))
    })
}

/// Join the text form of each element with `separator`.
pub fn implode(separator: impl Into<String>) -> Transformer {
    let separator = separator.into();
    Transformer::named("implode", move |value| {
        let parts = value
            .into_array()
            .values()
            .map(Value::to_text)
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Str(parts.join(separator.as_str())))
    })
}

/// Alias of [`implode`].
pub fn join(separator: impl Into<String>) -> Transformer {
    let inner = implode(separator);
    Transformer::named("join", move |value| inner.apply(value))
}
