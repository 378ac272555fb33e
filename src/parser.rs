//! Contains the recursive-descent `Parser`.
//!
//! There is one method per grammar production:
//!
//! ```text
//! start   = ws (object | array) ws EOF
//! object  = '{' ws '}' | '{' member (',' member)* '}'
//! member  = ws string ws ':' ws value ws
//! array   = '[' ws ']' | '[' element (',' element)* ']'
//! element = ws value ws
//! value   = string | number | object | array | 'true' | 'false' | 'null'
//! ```
//!
//! Every production fails on the first violation it sees; nothing is
//! skipped or repaired.

use crate::array::Array;
use crate::cursor::{class_of, Cursor, D, L, Q, S};
use crate::error::{Error, ErrorKind, Result};
use crate::escape::{code_unit, unescape};
use crate::limits::Limits;
use crate::number::{scan_number, Number};
use crate::object::Object;
use crate::value::Value;
use memchr::memchr2;

/// Parses a JSON document with the default [`Limits`].
///
/// The document must be a single object or array, optionally surrounded
/// by whitespace. Bare scalars such as `42` are rejected with
/// [`ErrorKind::NotJson`].
///
/// # Errors
/// Returns the first violation found, located by line and column.
///
/// # Examples
/// ```
/// use plain_json::{parse, ErrorKind};
///
/// let value = parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
/// assert_eq!(value["a"].to_number().unwrap().as_str(), "1");
/// assert_eq!(value["b"].to_array().unwrap().len(), 3);
///
/// assert_eq!(parse("42").unwrap_err().kind(), ErrorKind::NotJson);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parses a JSON document, enforcing `limits`.
///
/// # Errors
/// Everything [`parse`] reports, plus [`ErrorKind::InputTooLarge`] before
/// any parsing starts and [`ErrorKind::NestingTooDeep`] at the first
/// container past the depth limit.
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value> {
    if input.len() > limits.max_input_size {
        return Err(Error::at(ErrorKind::InputTooLarge, 1, 1));
    }
    Parser::new(input, limits).parse_start()
}

/// The recursive-descent parser state.
pub(crate) struct Parser<'a> {
    /// The position in the input.
    cursor: Cursor<'a>,
    /// Resource limits for this parse.
    limits: Limits,
    /// The number of arrays and objects currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, limits: Limits) -> Self {
        Parser {
            cursor: Cursor::new(input),
            limits,
            depth: 0,
        }
    }

    fn error(&self, kind: ErrorKind) -> Error {
        self.cursor.error(kind)
    }

    /// Consumes `byte`, or fails with `kind` (`JsonLength` at end of input).
    fn expect(&mut self, byte: u8, kind: ErrorKind) -> Result<()> {
        match self.cursor.peek() {
            Some(b) if b == byte => {
                self.cursor.advance_byte();
                Ok(())
            }
            Some(_) => Err(self.error(kind)),
            None => Err(self.error(ErrorKind::JsonLength)),
        }
    }

    /// Opens one level of nesting.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.limits.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn parse_start(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        let root = match self.cursor.peek() {
            Some(b'{') => self.parse_object()?,
            Some(b'[') => self.parse_array()?,
            _ => return Err(self.error(ErrorKind::NotJson)),
        };
        self.cursor.skip_whitespace();
        if self.cursor.peek().is_some() {
            return Err(self.error(ErrorKind::RootNotOne));
        }
        Ok(root)
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.advance_byte(); // Consume '{'
        self.cursor.skip_whitespace();

        let mut object = Object::new();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.advance_byte();
            self.leave();
            return Ok(Value::Object(object));
        }

        loop {
            self.cursor.skip_whitespace();
            let key = match self.cursor.peek() {
                Some(b'"') => self.parse_string()?,
                Some(_) => return Err(self.error(ErrorKind::BadKey)),
                None => return Err(self.error(ErrorKind::JsonLength)),
            };
            self.cursor.skip_whitespace();
            self.expect(b':', ErrorKind::MissColon)?;
            self.cursor.skip_whitespace();
            let value = self.parse_value()?;
            // Later duplicates replace earlier ones.
            object.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => self.cursor.advance_byte(),
                Some(b'}') => {
                    self.cursor.advance_byte();
                    break;
                }
                Some(_) => return Err(self.error(ErrorKind::LackCommaOrBrace)),
                None => return Err(self.error(ErrorKind::JsonLength)),
            }
        }

        self.leave();
        Ok(Value::Object(object))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.cursor.advance_byte(); // Consume '['
        self.cursor.skip_whitespace();

        let mut array = Array::new();
        if self.cursor.peek() == Some(b']') {
            self.cursor.advance_byte();
            self.leave();
            return Ok(Value::Array(array));
        }

        loop {
            self.cursor.skip_whitespace();
            array.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => self.cursor.advance_byte(),
                Some(b']') => {
                    self.cursor.advance_byte();
                    break;
                }
                Some(_) => return Err(self.error(ErrorKind::LackCommaOrBracket)),
                None => return Err(self.error(ErrorKind::JsonLength)),
            }
        }

        self.leave();
        Ok(Value::Array(array))
    }

    /// Dispatches on the first byte of a value.
    fn parse_value(&mut self) -> Result<Value> {
        let Some(byte) = self.cursor.peek() else {
            return Err(self.error(ErrorKind::JsonLength));
        };
        match class_of(byte) {
            Q => self.parse_string().map(Value::String),
            D => self.parse_number(),
            L if byte == b'n' => self.parse_null(),
            L => self.parse_boolean(),
            S => match byte {
                b'{' => self.parse_object(),
                b'[' => self.parse_array(),
                // A separator or closer where a value belongs.
                _ => Err(self.error(ErrorKind::MissValue)),
            },
            _ => Err(self.error(ErrorKind::BadValue)),
        }
    }

    /// Scans a quoted string and resolves its escapes.
    fn parse_string(&mut self) -> Result<String> {
        let opening = self.error(ErrorKind::BadEscape);
        let (raw, has_escapes) = self.scan_raw_string()?;
        if !has_escapes {
            return Ok(raw.to_owned());
        }
        // The scan has validated each escape letter; only an unpaired
        // surrogate can still fail here.
        unescape(raw).map_err(|_| opening)
    }

    /// Scans from the opening quote to the matching closing quote.
    ///
    /// Returns the text in between, still escaped, and whether it contains
    /// any backslash. Uses `memchr2` to jump between quotes and backslashes.
    fn scan_raw_string(&mut self) -> Result<(&'a str, bool)> {
        self.cursor.advance_byte(); // Consume opening '"'
        let start = self.cursor.pos();
        let mut has_escapes = false;

        loop {
            let rest = self.cursor.rest();
            let Some(offset) = memchr2(b'"', b'\\', rest) else {
                self.cursor.advance_by(rest.len());
                return Err(self.error(ErrorKind::JsonLength));
            };
            self.cursor.advance_by(offset);

            if rest[offset] == b'"' {
                let raw = self.cursor.slice(start, self.cursor.pos());
                self.cursor.advance_byte(); // Consume closing '"'
                return Ok((raw, has_escapes));
            }

            has_escapes = true;
            self.cursor.advance_byte(); // Consume '\'
            match self.cursor.peek() {
                Some(b'"' | b'\\' | b'/' | b't' | b'r' | b'n' | b'b' | b'f') => {
                    self.cursor.advance_byte();
                }
                Some(b'u') => {
                    self.cursor.advance_byte();
                    if code_unit(self.cursor.rest()).is_none() {
                        return Err(self.error(ErrorKind::BadEscape));
                    }
                    self.cursor.advance_by(4);
                }
                _ => return Err(self.error(ErrorKind::BadEscape)),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.cursor.pos();
        let len = scan_number(self.cursor.rest()).map_err(|kind| self.error(kind))?;
        self.cursor.advance_by(len);
        let text = self.cursor.slice(start, start + len);
        Ok(Value::Number(Number::from_scanned(text)))
    }

    fn parse_boolean(&mut self) -> Result<Value> {
        let rest = self.cursor.rest();
        let (len, value) = if rest.starts_with(b"true") {
            (4, true)
        } else if rest.starts_with(b"false") {
            (5, false)
        } else {
            return Err(self.error(ErrorKind::BadBoolean));
        };
        self.cursor.advance_by(len);
        Ok(Value::Boolean(value))
    }

    fn parse_null(&mut self) -> Result<Value> {
        if !self.cursor.rest().starts_with(b"null") {
            return Err(self.error(ErrorKind::BadNull));
        }
        self.cursor.advance_by(4);
        Ok(Value::Null)
    }
}
