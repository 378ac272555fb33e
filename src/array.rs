//! Contains `Array`, the ordered sequence payload of `Value::Array`.

use crate::error::{ErrorKind, Result};
use crate::value::Value;
use std::fmt;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

/// An ordered, growable sequence of JSON values.
///
/// The array owns its elements; cloning it clones every element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Array(Vec<Value>);

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Array(Vec::new())
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Appends a value to the end.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    /// Inserts a value at `index`, shifting later elements right.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index > self.0.len() {
            return Err(ErrorKind::IndexOutOfRange.into());
        }
        self.0.insert(index, value.into());
        Ok(())
    }

    /// The element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// The element at `index`, mutably, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// The element at `index`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&Value> {
        self.0
            .get(index)
            .ok_or_else(|| ErrorKind::IndexOutOfRange.into())
    }

    /// The element at `index`, mutably.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IndexOutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        self.0
            .get_mut(index)
            .ok_or_else(|| ErrorKind::IndexOutOfRange.into())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.0.len() {
            return Err(ErrorKind::IndexOutOfRange.into());
        }
        Ok(self.0.remove(index))
    }

    /// Removes every element in `range`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IndexOutOfRange`] if the range ends past the
    /// last element or starts after it ends. Nothing is removed then.
    ///
    /// # Examples
    /// ```
    /// use plain_json::Array;
    ///
    /// let mut array: Array = (0..5u32).collect();
    /// array.erase(1..3).unwrap();
    /// assert_eq!(array.to_string(), "[0,3,4]");
    /// assert!(array.erase(2..9).is_err());
    /// ```
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1).ok_or(ErrorKind::IndexOutOfRange)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.checked_add(1).ok_or(ErrorKind::IndexOutOfRange)?,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.0.len(),
        };
        if start > end || end > self.0.len() {
            return Err(ErrorKind::IndexOutOfRange.into());
        }
        self.0.drain(start..end);
        Ok(())
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Value) -> bool) {
        self.0.retain(keep);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Iterates mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Consumes the array, returning its elements.
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

/// Unchecked subscript. Use [`Array::at`] for a checked lookup.
///
/// # Panics
/// Panics if `index` is out of range, like slice indexing.
impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.0[index]
    }
}

/// # Panics
/// Panics if `index` is out of range, like slice indexing.
impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.0[index]
    }
}

/// Writes the compact form, e.g. `[1,"a",null]`.
impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::value::write_array(self, f, None)
    }
}
