use std::slice;

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, LongArray, Tag};

use super::{Compound, Value};

/// A `TAG_List`: an ordered sequence of values that all share one tag.
///
/// The content tag is fixed when the list is created. Every method that adds
/// a value checks it first, and refuses with an
/// [`InvariantViolation`](crate::error::ErrorKind::InvariantViolation) error if
/// the value has a different tag. A failed call leaves the list untouched.
///
/// A list with content tag [`Tag::End`] is the canonical empty list, and
/// nothing can be added to it.
///
/// ```
/// # use nbtree::{List, Tag, Value};
/// let mut list = List::new(Tag::Int);
/// list.push(1).unwrap();
/// list.push(2).unwrap();
///
/// assert!(list.push("three").is_err());
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    tag: Tag,
    elements: Vec<Value>,
}

impl List {
    /// Create an empty list that holds values of `tag`.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            elements: Vec::new(),
        }
    }

    /// An empty list without a content tag.
    pub fn empty() -> Self {
        Self::new(Tag::End)
    }

    pub(crate) fn with_capacity(tag: Tag, capacity: usize) -> Self {
        Self {
            tag,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Build a list of `tag` from `values`, failing on the first value with a
    /// different tag.
    pub fn from_values<I>(tag: Tag, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut list = Self::new(tag);
        list.try_extend(values)?;
        Ok(list)
    }

    pub fn content_tag(&self) -> Tag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    fn number(&self, index: usize) -> Option<&Value> {
        self.get(index).filter(|v| v.is_number())
    }

    // Typed getters convert numbers between widths the same way the
    // `Compound` getters do.

    pub fn get_byte(&self, index: usize) -> Option<i8> {
        self.number(index).and_then(Value::as_i64).map(|v| v as i8)
    }

    pub fn get_short(&self, index: usize) -> Option<i16> {
        self.number(index).and_then(Value::as_i64).map(|v| v as i16)
    }

    pub fn get_int(&self, index: usize) -> Option<i32> {
        self.number(index).and_then(Value::as_i64).map(|v| v as i32)
    }

    pub fn get_long(&self, index: usize) -> Option<i64> {
        self.number(index).and_then(Value::as_i64)
    }

    pub fn get_float(&self, index: usize) -> Option<f32> {
        self.number(index).and_then(Value::as_f64).map(|v| v as f32)
    }

    pub fn get_double(&self, index: usize) -> Option<f64> {
        self.number(index).and_then(Value::as_f64)
    }

    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    pub fn get_byte_array(&self, index: usize) -> Option<&ByteArray> {
        match self.get(index)? {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_int_array(&self, index: usize) -> Option<&IntArray> {
        match self.get(index)? {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_long_array(&self, index: usize) -> Option<&LongArray> {
        match self.get(index)? {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_list(&self, index: usize) -> Option<&List> {
        self.get(index).and_then(Value::as_list)
    }

    pub fn get_compound(&self, index: usize) -> Option<&Compound> {
        self.get(index).and_then(Value::as_compound)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;
        self.elements.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements along.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;
        if index > self.elements.len() {
            return Err(self.out_of_bounds(index));
        }
        self.elements.insert(index, value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        self.check(&value)?;
        match self.elements.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(self.out_of_bounds(index)),
        }
    }

    /// Append every value, or none of them if any has the wrong tag.
    pub fn try_extend<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        for value in &values {
            self.check(value)?;
        }
        self.elements.extend(values);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.elements.pop()
    }

    /// Remove all elements. The content tag is kept.
    pub fn clear(&mut self) {
        self.elements.clear()
    }

    fn check(&self, value: &Value) -> Result<()> {
        if self.tag == Tag::End {
            return Err(Error::invariant(format!(
                "cannot add {} to a list with content tag {}",
                value.tag(),
                Tag::End
            )));
        }

        if value.tag() != self.tag {
            return Err(Error::invariant(format!(
                "type mismatch: cannot put {} into a list of {}",
                value.tag(),
                self.tag
            )));
        }

        Ok(())
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::invariant(format!(
            "index {} out of bounds for list of length {}",
            index,
            self.elements.len()
        ))
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    /// The content tag is taken from the first value. An empty vector gives
    /// an End list.
    fn try_from(values: Vec<Value>) -> Result<Self> {
        let tag = match values.first() {
            None => return Ok(List::empty()),
            Some(first) => first.tag(),
        };
        List::from_values(tag, values)
    }
}
