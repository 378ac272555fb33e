//! The byte cursor the parser walks over its input.
//!
//! It tracks the 1-indexed line and column of its position for error
//! reporting and classifies bytes with a lookup table. It is *not* part
//! of the public API.

use crate::error::{Error, ErrorKind};
use memchr::{memchr_iter, memrchr};

// Byte classes, so the parser can dispatch on the next byte with one lookup.
pub(crate) const W: u8 = 1; // Whitespace
pub(crate) const S: u8 = 2; // Brackets, braces, ':' and ','
pub(crate) const L: u8 = 3; // Literal
pub(crate) const D: u8 = 4; // Digit or '-'
pub(crate) const Q: u8 = 5; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;

    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    table[b't' as usize] = L;
    table[b'f' as usize] = L;
    table[b'n' as usize] = L;

    table[b'"' as usize] = Q;

    table[b'-' as usize] = D;
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = D;
        digit += 1;
    }

    // Zero means no value can start here.
    table
};

/// The class of `byte` in the lookup table.
#[inline]
pub(crate) fn class_of(byte: u8) -> u8 {
    BYTE_PROPERTIES[byte as usize]
}

/// A position in the input, plus the line and column of that position.
pub(crate) struct Cursor<'a> {
    /// The input text.
    text: &'a str,
    /// The current position (byte index) in `text`.
    pos: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed, in bytes).
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Creates an error located at the current position.
    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.line, self.column)
    }

    /// The current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The next byte, or `None` at the end of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Everything from the current position to the end.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.pos..]
    }

    /// The text between two byte offsets.
    ///
    /// Both offsets must sit on ASCII bytes (or the ends of the input),
    /// which are always char boundaries.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Skips insignificant whitespace.
    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if class_of(byte) != W {
                break;
            }
            self.advance_byte();
        }
    }

    /// Advances the cursor by one byte, updating line/col.
    /// Does nothing at the end of input.
    #[inline]
    pub(crate) fn advance_byte(&mut self) {
        if let Some(byte) = self.peek() {
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    /// Advances the cursor by `n` bytes.
    pub(crate) fn advance_by(&mut self, n: usize) {
        self.advance_to(self.pos + n);
    }

    /// Moves the cursor forward to byte offset `end`, counting the
    /// newlines it passes over.
    pub(crate) fn advance_to(&mut self, end: usize) {
        let end = end.min(self.text.len());
        let skipped = &self.text.as_bytes()[self.pos..end];
        match memrchr(b'\n', skipped) {
            Some(last) => {
                self.line += memchr_iter(b'\n', skipped).count();
                self.column = skipped.len() - last;
            }
            None => self.column += skipped.len(),
        }
        self.pos = end;
    }
}
