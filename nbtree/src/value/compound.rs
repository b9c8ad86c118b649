use crate::filter::tokenize;
use crate::{ByteArray, IntArray, LongArray, Tag};

use super::{List, Value};

#[cfg(not(feature = "preserve-order"))]
type CompoundMap = std::collections::HashMap<String, Value>;
#[cfg(feature = "preserve-order")]
type CompoundMap = indexmap::IndexMap<String, Value>;

/// A `TAG_Compound`: a map from names to values.
///
/// Entries are unordered unless the `preserve-order` feature is enabled, in
/// which case iteration follows insertion order. Each compound owns its values,
/// and so transitively the whole subtree below it.
///
/// Lookups by path follow nested compounds using the same dotted notation as
/// [filters](crate::filter):
///
/// ```
/// # use nbtree::Compound;
/// let mut level = Compound::new();
/// level.insert("xPos", 12);
///
/// let mut chunk = Compound::new();
/// chunk.insert("Level", level);
///
/// assert_eq!(chunk.get_int("Level.xPos"), Some(12));
/// assert!(chunk.get_path("Level.zPos").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: CompoundMap,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get the value stored directly under `key`. Dots in `key` are not
    /// treated as separators; see [`get_path`](Self::get_path) for that.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Look up a value by a dot separated path of names, descending through
    /// nested compounds. A literal dot inside a name is written `\.`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let tokens = tokenize(path);
        let (last, parents) = tokens.split_last()?;

        let mut current = self;
        for token in parents {
            current = current.get(token)?.as_compound()?;
        }
        current.get(last)
    }

    /// Whether a value of the given tag exists at `path`.
    pub fn contains_tag(&self, path: &str, tag: Tag) -> bool {
        self.get_path(path).map_or(false, |v| v.tag() == tag)
    }

    fn number(&self, path: &str) -> Option<&Value> {
        self.get_path(path).filter(|v| v.is_number())
    }

    // The numeric getters convert between widths with `as` casts, so a Double
    // of 2.7 read with get_int gives 2.

    pub fn get_byte(&self, path: &str) -> Option<i8> {
        self.number(path).and_then(Value::as_i64).map(|v| v as i8)
    }

    pub fn get_short(&self, path: &str) -> Option<i16> {
        self.number(path).and_then(Value::as_i64).map(|v| v as i16)
    }

    pub fn get_int(&self, path: &str) -> Option<i32> {
        self.number(path).and_then(Value::as_i64).map(|v| v as i32)
    }

    pub fn get_long(&self, path: &str) -> Option<i64> {
        self.number(path).and_then(Value::as_i64)
    }

    pub fn get_float(&self, path: &str) -> Option<f32> {
        self.number(path).and_then(Value::as_f64).map(|v| v as f32)
    }

    pub fn get_double(&self, path: &str) -> Option<f64> {
        self.number(path).and_then(Value::as_f64)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_path(path).and_then(Value::as_str)
    }

    pub fn get_byte_array(&self, path: &str) -> Option<&ByteArray> {
        match self.get_path(path)? {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_int_array(&self, path: &str) -> Option<&IntArray> {
        match self.get_path(path)? {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_long_array(&self, path: &str) -> Option<&LongArray> {
        match self.get_path(path)? {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_list(&self, path: &str) -> Option<&List> {
        self.get_path(path).and_then(Value::as_list)
    }

    pub fn get_compound(&self, path: &str) -> Option<&Compound> {
        self.get_path(path).and_then(Value::as_compound)
    }
}

impl<K, V> FromIterator<(K, V)> for Compound
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Compound
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = <&'a CompoundMap as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
