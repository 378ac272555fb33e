//! Conversion between raw string content and its JSON-quoted form.

use crate::error::{ErrorKind, Result};
use memchr::memchr;
use std::fmt;

/// Replaces the seven characters JSON spells with a short escape.
///
/// Newline, tab, backslash, backspace, carriage return, double quote and
/// form feed become `\n`, `\t`, `\\`, `\b`, `\r`, `\"` and `\f`. Every other
/// character is copied unchanged. The pass runs left to right over the
/// input, so a backslash it inserts is never escaped a second time.
///
/// # Examples
/// ```
/// use plain_json::escape;
///
/// assert_eq!(escape("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// ```
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match short_escape(c) {
            Some(code) => {
                escaped.push('\\');
                escaped.push(code);
            }
            None => escaped.push(c),
        }
    }
    escaped
}

/// Writes `raw` between double quotes, escaped as [`escape`] does.
///
/// Control characters without a short escape are written as `\u00XX`, so
/// the output is always a valid JSON string.
pub(crate) fn write_quoted<W: fmt::Write>(raw: &str, w: &mut W) -> fmt::Result {
    w.write_char('"')?;
    for c in raw.chars() {
        match short_escape(c) {
            Some(code) => {
                w.write_char('\\')?;
                w.write_char(code)?;
            }
            None if c < '\u{0020}' => write!(w, "\\u{:04x}", c as u32)?,
            None => w.write_char(c)?,
        }
    }
    w.write_char('"')
}

/// The letter that follows the backslash when `c` is escaped.
#[inline]
fn short_escape(c: char) -> Option<char> {
    match c {
        '\n' => Some('n'),
        '\t' => Some('t'),
        '\\' => Some('\\'),
        '\u{0008}' => Some('b'),
        '\r' => Some('r'),
        '"' => Some('"'),
        '\u{000C}' => Some('f'),
        _ => None,
    }
}

/// Resolves every escape sequence in `text`.
///
/// Accepts the seven short escapes produced by [`escape`], plus `\/` and
/// `\uXXXX` (with surrogate pairs combined into one character).
///
/// # Errors
/// Returns [`ErrorKind::BadEscape`] for an unknown escape letter, a
/// backslash at the very end of the text, a `\u` without four hex digits,
/// or an unpaired surrogate.
///
/// # Examples
/// ```
/// use plain_json::unescape;
///
/// assert_eq!(unescape(r"tab\there").unwrap(), "tab\there");
/// assert_eq!(unescape(r"caf\u00e9").unwrap(), "café");
/// assert!(unescape("dangling\\").is_err());
/// ```
pub fn unescape(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let Some(first) = memchr(b'\\', bytes) else {
        return Ok(text.to_owned());
    };

    let mut raw = String::with_capacity(text.len());
    raw.push_str(&text[..first]);
    let mut cursor = first;

    while cursor < bytes.len() {
        let Some(offset) = memchr(b'\\', &bytes[cursor..]) else {
            raw.push_str(&text[cursor..]);
            break;
        };
        // Backslashes are ASCII, so both ends of this slice are char boundaries.
        raw.push_str(&text[cursor..cursor + offset]);
        cursor += offset + 1;

        let letter = *bytes.get(cursor).ok_or(ErrorKind::BadEscape)?;
        cursor += 1;
        match letter {
            b'n' => raw.push('\n'),
            b't' => raw.push('\t'),
            b'\\' => raw.push('\\'),
            b'b' => raw.push('\u{0008}'),
            b'r' => raw.push('\r'),
            b'"' => raw.push('"'),
            b'f' => raw.push('\u{000C}'),
            b'/' => raw.push('/'),
            b'u' => {
                let (c, consumed) = unicode_escape(&bytes[cursor..])?;
                raw.push(c);
                cursor += consumed;
            }
            _ => return Err(ErrorKind::BadEscape.into()),
        }
    }

    Ok(raw)
}

/// Decodes the body of a `\u` escape, starting right after the `u`.
///
/// Returns the character and the number of bytes consumed. A leading
/// surrogate must be followed by `\u` and a trailing surrogate.
fn unicode_escape(bytes: &[u8]) -> Result<(char, usize)> {
    let first = code_unit(bytes).ok_or(ErrorKind::BadEscape)?;
    let (code_point, consumed) = match first {
        0xD800..=0xDBFF => {
            let second = match bytes.get(4..6) {
                Some(b"\\u") => code_unit(&bytes[6..]),
                _ => None,
            };
            match second {
                Some(low @ 0xDC00..=0xDFFF) => {
                    (0x1_0000 + (((first - 0xD800) << 10) | (low - 0xDC00)), 10)
                }
                _ => return Err(ErrorKind::BadEscape.into()),
            }
        }
        0xDC00..=0xDFFF => return Err(ErrorKind::BadEscape.into()),
        _ => (first, 4),
    };
    let c = char::from_u32(code_point).ok_or(ErrorKind::BadEscape)?;
    Ok((c, consumed))
}

/// Reads four hex digits. Returns `None` if fewer than four are present.
pub(crate) fn code_unit(bytes: &[u8]) -> Option<u32> {
    let digits = bytes.get(..4)?;
    digits.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(16)?;
        Some(acc * 16 + digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_seven() {
        let raw = "\n \t \\ \u{0008} \r \" \u{000C}";
        assert_eq!(escape(raw), r#"\n \t \\ \b \r \" \f"#);
    }

    #[test]
    fn test_escape_passes_everything_else_through() {
        assert_eq!(escape("plain / text é 😀"), "plain / text é 😀");
        assert_eq!(escape("\u{0001}"), "\u{0001}");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // One backslash in, one escaped pair out.
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape("\\n"), "\\\\n");
        assert_eq!(escape("\"\""), "\\\"\\\"");
    }

    #[test]
    fn test_write_quoted_matches_escape() {
        let raw = "a \"b\"\n\\c";
        let mut quoted = String::new();
        write_quoted(raw, &mut quoted).unwrap();
        assert_eq!(quoted, format!("\"{}\"", escape(raw)));
    }

    #[test]
    fn test_write_quoted_escapes_other_control_characters() {
        let mut quoted = String::new();
        write_quoted("a\u{0001}b\u{0000}\u{001f}\n", &mut quoted).unwrap();
        assert_eq!(quoted, r#""a\u0001b\u0000\u001f\n""#);
        assert_eq!(unescape(&quoted[1..quoted.len() - 1]).unwrap(), "a\u{0001}b\u{0000}\u{001f}\n");

        // The public escaper keeps to its seven characters.
        assert_eq!(escape("\u{0001}"), "\u{0001}");
    }

    #[test]
    fn test_unescape_short_escapes() {
        assert_eq!(
            unescape(r#"\n \t \\ \b \r \" \f \/"#).unwrap(),
            "\n \t \\ \u{0008} \r \" \u{000C} /"
        );
    }

    #[test]
    fn test_unescape_without_backslash_is_identity() {
        assert_eq!(unescape("hello, world").unwrap(), "hello, world");
    }

    #[test]
    fn test_unescape_unicode() {
        assert_eq!(unescape(r"\u0041").unwrap(), "A");
        assert_eq!(unescape(r"caf\u00e9!").unwrap(), "café!");
        assert_eq!(unescape(r"\ud83d\ude00").unwrap(), "😀");
    }

    #[test]
    fn test_unescape_errors() {
        for bad in [r"\x", "end\\", r"\u12", r"\u12G4", r"\ud83d", r"\ud83dx", r"\ude00"] {
            let err = unescape(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadEscape, "input {:?}", bad);
        }
    }

    #[test]
    fn test_unescape_inverts_escape() {
        for s in [
            "",
            "plain",
            "line\nbreak",
            "\\\\\"quoted\"\\",
            "\t\r\n\u{0008}\u{000C}",
            "mixed é \\n literal",
        ] {
            assert_eq!(unescape(&escape(s)).unwrap(), s);
        }
    }
}
