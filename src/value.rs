//! Contains the `Value` enum, the node type of a parsed JSON tree.
//!
//! This module also includes the serialization logic for converting a
//! `Value` back into compact or indented JSON text.
use crate::array::Array;
use crate::error::{Error, ErrorKind, Result};
use crate::escape::write_quoted;
use crate::number::Number;
use crate::object::Object;
use crate::parser;
use std::fmt;
use std::ops;
use std::str::FromStr;

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// A number, kept as text.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// Any JSON value.
///
/// Arrays and objects own their children exclusively, so a tree has no
/// shared nodes and no cycles. `clone` copies the whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Represents a JSON `null`.
    #[default]
    Null,
    /// Represents a JSON `true` or `false`.
    Boolean(bool),
    /// Represents a JSON number as its source text.
    Number(Number),
    /// Represents a JSON string, with escapes already resolved.
    String(String),
    /// Represents a JSON array.
    Array(Array),
    /// Represents a JSON object.
    Object(Object),
}

impl Value {
    /// Parses a JSON document into a `Value`.
    ///
    /// The document must be a single object or array. See [`crate::parse`].
    ///
    /// # Errors
    /// Returns the first syntax violation found.
    pub fn parse(input: &str) -> Result<Value> {
        parser::parse(input)
    }

    /// The type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns true if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns true if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array, if this is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The object, if this is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The boolean.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not a boolean.
    pub fn to_bool(&self) -> Result<bool> {
        self.as_bool().ok_or_else(bad_type)
    }

    /// The number.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not a number.
    pub fn to_number(&self) -> Result<&Number> {
        self.as_number().ok_or_else(bad_type)
    }

    /// The string content.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not a string.
    pub fn to_str(&self) -> Result<&str> {
        self.as_str().ok_or_else(bad_type)
    }

    /// The array payload. No other type is ever read as an array.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not an array.
    pub fn to_array(&self) -> Result<&Array> {
        self.as_array().ok_or_else(bad_type)
    }

    /// The array payload, mutably.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not an array.
    pub fn to_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(bad_type()),
        }
    }

    /// The object payload. No other type is ever read as an object.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not an object.
    pub fn to_object(&self) -> Result<&Object> {
        self.as_object().ok_or_else(bad_type)
    }

    /// The object payload, mutably.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not an object.
    pub fn to_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(bad_type()),
        }
    }

    /// Checked lookup by array index (`usize`) or object key (`&str`).
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if the value is not the matching
    /// container, [`ErrorKind::IndexOutOfRange`] for an index past the end
    /// and [`ErrorKind::KeyNotFound`] for a missing key.
    ///
    /// # Examples
    /// ```
    /// use plain_json::{parse, ErrorKind};
    ///
    /// let doc = parse(r#"{"list":[10,20]}"#).unwrap();
    /// assert_eq!(doc.at("list").unwrap().at(1).unwrap().to_string(), "20");
    /// assert_eq!(doc.at("nope").unwrap_err().kind(), ErrorKind::KeyNotFound);
    /// assert_eq!(doc.at(0).unwrap_err().kind(), ErrorKind::BadType);
    /// ```
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Checked mutable lookup, see [`Value::at`].
    ///
    /// # Errors
    /// Same as [`Value::at`].
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }

    /// The member named `key`, inserting `null` first if it is missing.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadType`] if this is not an object.
    pub fn entry(&mut self, key: impl Into<String>) -> Result<&mut Value> {
        Ok(self.to_object_mut()?.entry(key))
    }

    /// Serializes the value into indented JSON text.
    ///
    /// Containers put one element per line, indented by two spaces, with
    /// `": "` after each key. Empty containers stay `[]` and `{}`.
    pub fn to_string_pretty(&self) -> String {
        Pretty(self).to_string()
    }
}

fn bad_type() -> Error {
    Error::new(ErrorKind::BadType)
}

// --- Lookup keys ---

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A type that can address a child of a [`Value`]: `usize` for arrays,
/// `str`/`String` for objects.
///
/// This trait is sealed.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;

    /// Like `index_into_mut`, but a missing object key is inserted as `null`.
    #[doc(hidden)]
    fn index_or_insert<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value.to_array()?.at(*self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        value.to_array_mut()?.at_mut(*self)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.index_into_mut(value)
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value.to_object()?.at(self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        value.to_object_mut()?.at_mut(self)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        value.entry(self)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_or_insert(value)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(value)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_or_insert(value)
    }
}

/// Subscript by index or key.
///
/// # Panics
/// Panics where [`Value::at`] would return an error: wrong container type,
/// index out of range or missing key.
impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        match index.index_into(self) {
            Ok(value) => value,
            Err(err) => panic!("cannot index {} value: {}", self.type_name(), err),
        }
    }
}

/// Mutable subscript. A missing object key is inserted as `null`.
///
/// # Panics
/// Panics on the wrong container type or an array index out of range.
impl<I: ValueIndex> ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        let type_name = self.type_name();
        match index.index_or_insert(self) {
            Ok(value) => value,
            Err(err) => panic!("cannot index {} value: {}", type_name, err),
        }
    }
}

// --- Conversions ---

macro_rules! value_from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_integer!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(n: f64) -> Result<Self> {
        Number::try_from(n).map(Value::Number)
    }
}

impl TryFrom<f32> for Value {
    type Error = Error;

    fn try_from(n: f32) -> Result<Self> {
        Number::try_from(n).map(Value::Number)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

// --- Serialization ---
//
// One writer serves both layouts. `depth` is `None` for compact output and
// the current nesting level for indented output.

/// Writes the compact form: no whitespace, strings and keys escaped.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, None)
    }
}

/// Display adapter for the indented form.
struct Pretty<'a>(&'a Value);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self.0, f, Some(0))
    }
}

/// Two spaces per nesting level.
const INDENT: &str = "  ";

fn write_value<W: fmt::Write>(value: &Value, w: &mut W, depth: Option<usize>) -> fmt::Result {
    match value {
        Value::Null => w.write_str("null"),
        Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => w.write_str(n.as_str()),
        Value::String(s) => write_quoted(s, w),
        Value::Array(a) => write_array(a, w, depth),
        Value::Object(o) => write_object(o, w, depth),
    }
}

pub(crate) fn write_array<W: fmt::Write>(
    array: &Array,
    w: &mut W,
    depth: Option<usize>,
) -> fmt::Result {
    write_members(w, depth, ('[', ']'), array.iter().map(|v| (None, v)))
}

pub(crate) fn write_object<W: fmt::Write>(
    object: &Object,
    w: &mut W,
    depth: Option<usize>,
) -> fmt::Result {
    let members = object.iter().map(|(k, v)| (Some(k.as_str()), v));
    write_members(w, depth, ('{', '}'), members)
}

/// Writes `(key, value)` members between a pair of brackets.
///
/// Array elements have no key. An empty container is written as its two
/// brackets in either layout.
fn write_members<'v, W, I>(
    w: &mut W,
    depth: Option<usize>,
    (open, close): (char, char),
    members: I,
) -> fmt::Result
where
    W: fmt::Write,
    I: Iterator<Item = (Option<&'v str>, &'v Value)>,
{
    let inner = depth.map(|level| level + 1);
    w.write_char(open)?;

    let mut written = 0;
    for (key, value) in members {
        if written > 0 {
            w.write_char(',')?;
        }
        if let Some(level) = inner {
            new_line(w, level)?;
        }
        if let Some(key) = key {
            write_quoted(key, w)?;
            w.write_str(if inner.is_some() { ": " } else { ":" })?;
        }
        write_value(value, w, inner)?;
        written += 1;
    }

    if let (Some(level), true) = (depth, written > 0) {
        new_line(w, level)?;
    }
    w.write_char(close)
}

fn new_line<W: fmt::Write>(w: &mut W, level: usize) -> fmt::Result {
    w.write_char('\n')?;
    (0..level).try_for_each(|_| w.write_str(INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        let mut object = Object::new();
        object.insert("name", "plain");
        object.insert("tags", Array::from_iter(["a", "b"]));
        object.insert("count", 2u8);
        object.insert("nothing", Value::Null);
        Value::from(object)
    }

    #[test]
    fn test_type_predicates() {
        let values = [
            Value::Null,
            Value::from(false),
            Value::from(1u8),
            Value::from("s"),
            Value::from(Array::new()),
            Value::from(Object::new()),
        ];
        let checks: [fn(&Value) -> bool; 6] = [
            Value::is_null,
            Value::is_boolean,
            Value::is_number,
            Value::is_string,
            Value::is_array,
            Value::is_object,
        ];
        for (i, value) in values.iter().enumerate() {
            for (j, check) in checks.iter().enumerate() {
                assert_eq!(check(value), i == j, "{} check #{}", value.type_name(), j);
            }
        }
        assert_eq!(Value::default().value_type(), ValueType::Null);
        assert_eq!(values[4].value_type(), ValueType::Array);
    }

    #[test]
    fn test_primitives_store_canonical_text() {
        assert_eq!(Value::from(42u64).to_number().unwrap().as_str(), "42");
        assert_eq!(Value::from(-42i32).to_string(), "-42");
        assert_eq!(Value::try_from(0.25f64).unwrap().to_string(), "0.25");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(None::<u8>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        assert_eq!(
            Value::try_from(f64::INFINITY).unwrap_err().kind(),
            ErrorKind::BadNumber
        );
    }

    #[test]
    fn test_accessors_reject_other_types() {
        let s = Value::from("text");
        assert_eq!(s.to_array().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(s.to_object().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(s.to_number().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(s.to_bool().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(s.to_str().unwrap(), "text");

        let mut n = Value::from(1u8);
        assert_eq!(n.to_array_mut().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(n.to_object_mut().unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(n.entry("k").unwrap_err().kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_at_distinguishes_miss_from_type_mismatch() {
        let value = sample();
        assert_eq!(value.at("name").unwrap(), &Value::from("plain"));
        assert_eq!(value.at(&"tags".to_string()).unwrap().at(1).unwrap(), &Value::from("b"));
        assert_eq!(value.at("zzz").unwrap_err().kind(), ErrorKind::KeyNotFound);
        assert_eq!(value["tags"].at(5).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(value.at(0).unwrap_err().kind(), ErrorKind::BadType);
        assert_eq!(value["name"].at("x").unwrap_err().kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_at_mut_and_index_mut() {
        let mut value = sample();
        *value.at_mut("count").unwrap() = Value::from(3u8);
        value["tags"][0] = Value::from("z");
        value["new"] = Value::from(Array::new());
        value["new"].to_array_mut().unwrap().push(Value::Null);
        assert_eq!(value["count"], Value::from(3u8));
        assert_eq!(value["tags"][0], Value::from("z"));
        assert_eq!(value["new"].to_string(), "[null]");
        assert!(value.at_mut("missing").is_err());
    }

    #[test]
    #[should_panic(expected = "cannot index array value: index out of range")]
    fn test_index_out_of_range_panics() {
        let value = Value::from(Array::new());
        let _ = &value[0];
    }

    #[test]
    #[should_panic(expected = "cannot index string value: bad type")]
    fn test_index_mut_on_scalar_panics() {
        let mut value = Value::from("s");
        value["k"] = Value::Null;
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy["tags"].to_array_mut().unwrap().clear();
        copy["name"] = Value::from("changed");
        assert_eq!(original["tags"].to_array().unwrap().len(), 2);
        assert_eq!(original["name"], Value::from("plain"));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_stringify_compact() {
        assert_eq!(
            sample().to_string(),
            r#"{"count":2,"name":"plain","nothing":null,"tags":["a","b"]}"#
        );
        assert_eq!(Value::from(Array::new()).to_string(), "[]");
        assert_eq!(Value::from(Object::new()).to_string(), "{}");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_stringify_escapes_string_values() {
        let value = Value::from("a \"quoted\" \\ string\n");
        assert_eq!(value.to_string(), r#""a \"quoted\" \\ string\n""#);
    }

    #[test]
    fn test_stringify_pretty() {
        let expected = "{\n  \"count\": 2,\n  \"name\": \"plain\",\n  \"nothing\": null,\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}";
        assert_eq!(sample().to_string_pretty(), expected);
        assert_eq!(Value::from(Array::new()).to_string_pretty(), "[]");
        assert_eq!(Value::from(Object::new()).to_string_pretty(), "{}");
        assert_eq!(Value::from(7u8).to_string_pretty(), "7");
    }

    #[test]
    fn test_compact_and_pretty_share_layout_rules() {
        let value: Value = r#"{"a":[],"b":{"c":[1,{}]},"d":"x"}"#.parse().unwrap();
        assert_eq!(value.to_string(), r#"{"a":[],"b":{"c":[1,{}]},"d":"x"}"#);
        let expected = "{\n  \"a\": [],\n  \"b\": {\n    \"c\": [\n      1,\n      {}\n    ]\n  },\n  \"d\": \"x\"\n}";
        assert_eq!(value.to_string_pretty(), expected);
        assert_eq!(value["b"].to_object().unwrap().to_string(), r#"{"c":[1,{}]}"#);
        assert_eq!(value["b"]["c"].to_array().unwrap().to_string(), "[1,{}]");
    }
}
