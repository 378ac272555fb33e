//! Contains `Object`, the key-to-value map payload of `Value::Object`.

use crate::error::{ErrorKind, Result};
use crate::value::Value;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A map from unescaped string keys to JSON values.
///
/// Keys are unique; inserting an existing key replaces its value. The map
/// is sorted, so iteration visits keys in byte order, but callers should
/// only rely on each key being visited exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object(BTreeMap<String, Value>);

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Object(BTreeMap::new())
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Inserts or overwrites a member, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// The value stored under `key`, or `None` if there is no such member.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value stored under `key`, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Whether a member named `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The value stored under `key`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::KeyNotFound`] if there is no such member.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| ErrorKind::KeyNotFound.into())
    }

    /// The value stored under `key`, mutably.
    ///
    /// # Errors
    /// Returns [`ErrorKind::KeyNotFound`] if there is no such member.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.0
            .get_mut(key)
            .ok_or_else(|| ErrorKind::KeyNotFound.into())
    }

    /// The value stored under `key`, inserting `null` first if it is missing.
    pub fn entry(&mut self, key: impl Into<String>) -> &mut Value {
        self.0.entry(key.into()).or_default()
    }

    /// Removes a member, returning its value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Keeps only the members for which `keep` returns `true`.
    ///
    /// This is the way to erase members while walking the map.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &mut Value) -> bool) {
        self.0.retain(|key, value| keep(key, value));
    }

    /// Iterates over `(key, value)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Iterates over `(key, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over the values.
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = btree_map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

/// # Panics
/// Panics if there is no member named `key`. Use [`Object::at`] or
/// [`Object::get`] for a non-panicking lookup.
impl Index<&str> for Object {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("no member named {:?} in object", key),
        }
    }
}

/// Inserts a `null` member when `key` is missing.
impl IndexMut<&str> for Object {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.entry(key)
    }
}

/// Writes the compact form, e.g. `{"a":1,"b":[]}`.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::value::write_object(self, f, None)
    }
}
