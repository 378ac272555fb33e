//! Contains `Number`, a JSON number kept as its source text.

use crate::error::{Error, ErrorKind, Result};
use std::fmt;
use std::str::FromStr;

/// A JSON number, stored verbatim as text.
///
/// The text always matches the JSON number grammar. Nothing is converted
/// to a machine type unless the caller asks for it, so `1.0` and `1` are
/// different numbers here and large integers never lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Validates `text` against the number grammar and wraps it.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadNumber`] if `text` is not exactly one JSON
    /// number.
    ///
    /// # Examples
    /// ```
    /// use plain_json::Number;
    ///
    /// assert_eq!(Number::new("-1.5e3").unwrap().as_str(), "-1.5e3");
    /// assert!(Number::new("01").is_err());
    /// assert!(Number::new("1 ").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        match scan_number(text.as_bytes()) {
            Ok(len) if len == text.len() => Ok(Number(text.to_owned())),
            Ok(_) => Err(Error::new(ErrorKind::BadNumber)),
            Err(kind) => Err(Error::new(kind)),
        }
    }

    /// Wraps text the parser has already matched.
    pub(crate) fn from_scanned(text: &str) -> Self {
        Number(text.to_owned())
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the text with `FromStr`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::BadNumber`] if the text does not fit `T`,
    /// e.g. a fraction read as an integer or an integer out of range.
    pub fn parse<T: FromStr>(&self) -> Result<T> {
        self.0
            .parse()
            .map_err(|_| Error::new(ErrorKind::BadNumber))
    }

    /// The value as `i64`, if it is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// The value as `u64`, if it is a non-negative integer in range.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The value as the nearest `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }

    /// Whether the text has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        !self.0.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Number::new(s)
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

macro_rules! number_from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number(n.to_string())
                }
            }
        )*
    };
}

number_from_integer!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl TryFrom<f64> for Number {
    type Error = Error;

    /// Uses the shortest text that reads back as the same `f64`.
    ///
    /// NaN and the infinities have no JSON spelling and are rejected.
    fn try_from(n: f64) -> Result<Self> {
        if n.is_finite() {
            Ok(Number(format!("{:?}", n)))
        } else {
            Err(Error::new(ErrorKind::BadNumber))
        }
    }
}

impl TryFrom<f32> for Number {
    type Error = Error;

    fn try_from(n: f32) -> Result<Self> {
        if n.is_finite() {
            Ok(Number(format!("{:?}", n)))
        } else {
            Err(Error::new(ErrorKind::BadNumber))
        }
    }
}

/// Matches the longest number at the start of `bytes`.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
/// Returns the length of the match. A leading zero followed by another
/// digit, a `.` or exponent marker without digits, and a missing integer
/// part are all [`ErrorKind::BadNumber`].
pub(crate) fn scan_number(bytes: &[u8]) -> std::result::Result<usize, ErrorKind> {
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => {
            pos += 1;
            if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(ErrorKind::BadNumber);
            }
        }
        Some(b'1'..=b'9') => pos += digits_from(pos),
        _ => return Err(ErrorKind::BadNumber),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let fraction = digits_from(pos);
        if fraction == 0 {
            return Err(ErrorKind::BadNumber);
        }
        pos += fraction;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent = digits_from(pos);
        if exponent == 0 {
            return Err(ErrorKind::BadNumber);
        }
        pos += exponent;
    }

    Ok(pos)
}
