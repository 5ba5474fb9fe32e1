//! Ordered keyed collection.
//!
//! An `Array` is a sequence of `(Key, Value)` entries with unique keys. It
//! remembers the next positional index so that `push` keeps counting after the
//! largest integer key ever inserted, even if that entry is later replaced.

use std::collections::HashMap;
use std::fmt;

use crate::error::{PipeError, Result};
use crate::key::Key;
use crate::value::Value;

#[derive(Clone, Default)]
pub struct Array {
    entries: Vec<(Key, Value)>,
    /// Position of each key in `entries`.
    index: HashMap<Key, usize>,
    /// Wide enough to hold one past `i64::MAX`.
    next_index: i128,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Build a list keyed `0..n`.
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        values.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append under the next positional index.
    ///
    /// Fails once an entry keyed `i64::MAX` exists, since there is no next
    /// index left.
    pub fn push(&mut self, value: Value) -> Result<()> {
        let next = i64::try_from(self.next_index).map_err(|_| {
            PipeError::invalid_argument(
                "cannot add element to the array as the next element is already occupied",
            )
        })?;
        self.insert(Key::Int(next), value);
        Ok(())
    }

    /// Insert under `key`, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: Key, value: Value) {
        if let Key::Int(n) = key {
            let used = i128::from(n);
            if used >= self.next_index {
                self.next_index = used + 1;
            }
        }
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    pub fn first(&self) -> Option<&Value> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_values(self) -> impl DoubleEndedIterator<Item = Value> + ExactSizeIterator {
        self.entries.into_iter().map(|(_, v)| v)
    }

    /// True when the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == Key::Int(i as i64))
    }

    /// Same values, keys renumbered `0..len`.
    pub fn reindexed(self) -> Self {
        Self::list(self.into_values())
    }

    /// Merge `other` into `self`: positional entries are appended under fresh
    /// indices, named entries overwrite any existing entry with the same key.
    pub fn append_merge(&mut self, other: Array) -> Result<()> {
        for (key, value) in other {
            match key {
                Key::Int(_) => self.push(value)?,
                Key::Str(_) => self.insert(key, value),
            }
        }
        Ok(())
    }

    /// Slice by position.
    ///
    /// A negative `offset` counts from the end. A `length` of `None` runs to
    /// the end, a negative `length` stops that many entries before the end.
    /// Without `preserve_keys` integer keys are renumbered from zero; string
    /// keys are always kept.
    pub fn slice(self, offset: i64, length: Option<i64>, preserve_keys: bool) -> Self {
        let len = self.entries.len() as i64;
        let start = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(l) if l < 0 => len + l,
            Some(l) => start.saturating_add(l).min(len),
        };
        if end <= start {
            return Self::new();
        }

        let picked = self
            .entries
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize);
        if preserve_keys {
            return picked.collect();
        }
        let mut position = 0;
        let mut out = Self::new();
        for (key, value) in picked {
            match key {
                Key::Int(_) => {
                    out.insert(Key::Int(position), value);
                    position += 1;
                }
                Key::Str(_) => out.insert(key, value),
            }
        }
        out
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut out = Self::new();
        for (position, value) in (0i64..).zip(iter) {
            out.insert(Key::Int(position), value);
        }
        out
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, value) in iter {
            out.insert(key, value);
        }
        out
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build an [`Array`].
///
/// `array![1, 2, 3]` builds a list, `array!{"a" => 1, "b" => 2}` a keyed array.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut out = $crate::Array::new();
        $( out.insert($crate::Key::from($key), $crate::Value::from($value)); )+
        out
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Array::list([$($crate::Value::from($value)),+])
    };
}
