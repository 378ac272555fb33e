//! # plain-json
//!
//! `plain-json` is a small, 100% safe JSON library built from scratch in
//! pure Rust. It parses a document into an owned [`Value`] tree, lets you
//! inspect and edit that tree, and writes it back out as compact or
//! indented text.
//!
//! ## Key Features
//!
//! * **100% Safe Rust:** Contains no `unsafe` code.
//! * **Numbers kept as text:** A [`Number`] holds the exact digits it was
//!   parsed from, so `9007199254740993` or `1.10` survive a round trip
//!   unchanged.
//! * **Located errors:** Every parse failure carries an [`ErrorKind`] plus
//!   the line and column where it was found.
//! * **Resource limits:** Nesting depth and input size are bounded by
//!   default. See [`Limits`].
//! * **Optimized Performance:** The parser classifies bytes with a
//!   branchless Lookup Table (LUT) and scans strings with `memchr`.
//!
//! ## Quick Start: Parsing
//!
//! ```
//! use plain_json::{parse, Value};
//!
//! let doc = parse(r#"{ "name": "Babbage", "id": 1815, "tags": ["math"] }"#).unwrap();
//!
//! assert_eq!(doc["name"].as_str(), Some("Babbage"));
//! assert_eq!(doc["id"].to_number().unwrap().as_i64(), Some(1815));
//! assert_eq!(doc["tags"][0], Value::from("math"));
//! ```
//!
//! ## Quick Start: Building and Serializing
//!
//! ```
//! use plain_json::{Array, Object, Value};
//!
//! let mut user = Object::new();
//! user.insert("username", "ada_l");
//! user.insert("id", 1815);
//! user.insert("langs", Array::from_iter(["en", "fr"]));
//!
//! let value = Value::from(user);
//! assert_eq!(
//!     value.to_string(),
//!     r#"{"id":1815,"langs":["en","fr"],"username":"ada_l"}"#
//! );
//! ```

/// Contains `Array`, the payload of `Value::Array`.
pub mod array;
/// Contains the `Error` type and its `ErrorKind` classification.
pub mod error;
/// String escaping and unescaping.
pub mod escape;
/// Contains `Limits`, the resource bounds applied while parsing.
pub mod limits;
/// Contains `Number`, a JSON number kept as its source text.
pub mod number;
/// Contains `Object`, the payload of `Value::Object`.
pub mod object;
/// Contains the recursive-descent parser.
pub mod parser;
/// Contains the `Value` enum and the serialization logic.
pub mod value;

/// The internal byte cursor with line/column tracking.
/// This module is private to the crate.
mod cursor;

pub use array::Array;
pub use error::{Error, ErrorKind, Result};
pub use escape::{escape, unescape};
pub use limits::Limits;
pub use number::Number;
pub use object::Object;
pub use parser::{parse, parse_with_limits};
pub use value::{Value, ValueIndex, ValueType};

#[cfg(test)]
mod tests {
    use super::{parse, parse_with_limits, Array, ErrorKind, Limits, Number, Object, Value};
    use serde_json::{self, Value as SerdeValue};

    /// A document exercising every value kind, nesting, and escapes.
    const SAMPLE: &str = r#"
    {
        "name": "Babbage",
        "age": 30,
        "admin": true,
        "spouse": null,
        "friends": ["Ada", "Charles", "Grace"],
        "tasks": [
            { "id": 1, "title": "Parse \"JSON\"", "done": false },
            { "id": 2, "title": "Write docs\n\tthen rest", "done": true }
        ],
        "nested": {"key": [null, -1, 1.23e4, 0.5, -0.0, 6.02E+23]},
        "path": "C:\\temp\/x"
    }
    "#;

    fn serde(text: &str) -> SerdeValue {
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("{}").unwrap().to_object().unwrap().len(), 0);
        assert_eq!(parse("[]").unwrap().to_array().unwrap().len(), 0);
    }

    #[test]
    fn test_simple_document() {
        let value = parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
        assert_eq!(value.to_object().unwrap().len(), 2);
        assert_eq!(value["a"], Value::Number(Number::new("1").unwrap()));
        let b = value["b"].to_array().unwrap();
        assert_eq!(b.as_slice(), [Value::from(true), Value::from(false), Value::Null]);
    }

    #[test]
    fn test_spec_error_kinds() {
        assert_eq!(parse("[01]").unwrap_err().kind(), ErrorKind::BadNumber);
        assert_eq!(parse(r#"{"a":1"#).unwrap_err().kind(), ErrorKind::JsonLength);
        assert_eq!(
            parse(r#"{"a":1 x"#).unwrap_err().kind(),
            ErrorKind::LackCommaOrBrace
        );
        assert_eq!(parse("42").unwrap_err().kind(), ErrorKind::NotJson);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let value = parse(r#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(value.to_object().unwrap().len(), 1);
        assert_eq!(value["a"].to_string(), "2");
    }

    #[test]
    fn test_matches_serde_json() {
        let ours = parse(SAMPLE).unwrap();
        assert_eq!(serde(&ours.to_string()), serde(SAMPLE));
        assert_eq!(serde(&ours.to_string_pretty()), serde(SAMPLE));
    }

    #[test]
    fn test_round_trip_is_stable() {
        let first = parse(SAMPLE).unwrap();
        let compact = first.to_string();
        let second = parse(&compact).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.to_string(), compact);

        let pretty = first.to_string_pretty();
        assert_eq!(parse(&pretty).unwrap(), first);
    }

    #[test]
    fn test_numbers_round_trip_verbatim() {
        let text = "[9007199254740993,1.10,-0,1E400,2.5e-3]";
        let value = parse(text).unwrap();
        assert_eq!(value.to_string(), text);
        assert_eq!(value[0].to_number().unwrap().as_u64(), Some(9007199254740993));
    }

    #[test]
    fn test_strings_decode_like_serde_json() {
        let text = "[\"\\u0041\\u00e9\\ud83d\\ude00\", \"tab\\there\", \"q\\\"uote\"]";
        let ours = parse(text).unwrap();
        let theirs = serde(text);
        for (index, expected) in theirs.as_array().unwrap().iter().enumerate() {
            assert_eq!(ours[index].as_str(), expected.as_str());
        }
    }

    #[test]
    fn test_control_characters_serialize_as_valid_json() {
        let parsed = parse(r#"["a\u0001b"]"#).unwrap();
        assert_eq!(parsed[0].as_str(), Some("a\u{0001}b"));
        let text = parsed.to_string();
        assert_eq!(text, r#"["a\u0001b"]"#);
        assert_eq!(serde(&text), serde_json::json!(["a\u{0001}b"]));

        let mut object = Object::new();
        object.insert("key\u{001f}", "\u{0000}");
        let built = Value::from(object);
        assert_eq!(serde(&built.to_string()), serde_json::json!({"key\u{001f}": "\u{0000}"}));
        assert_eq!(serde(&built.to_string_pretty()), serde(&built.to_string()));
        assert_eq!(parse(&built.to_string()).unwrap(), built);
    }

    #[test]
    fn test_trailing_content_is_rejected() {
        let err = parse("[1] [2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RootNotOne);
        assert_eq!((err.line(), err.column()), (Some(1), Some(5)));
    }

    #[test]
    fn test_error_display() {
        let err = parse("[1, ?]").unwrap_err();
        assert_eq!(err.to_string(), "bad value at line 1, column 5");

        let err = parse("\n\n{\"key\" 1}").unwrap_err();
        assert_eq!(err.to_string(), "miss colon at line 3, column 8");
    }

    #[test]
    fn test_security_limits() {
        let evil_input = "[".repeat(101) + &"]".repeat(101);
        let limits = Limits::default().with_max_depth(100);
        let err = parse_with_limits(&evil_input, limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
        assert_eq!((err.line(), err.column()), (Some(1), Some(101)));

        let ok_input = "[".repeat(100) + &"]".repeat(100);
        assert!(parse_with_limits(&ok_input, limits).is_ok());

        // The default depth limit keeps recursion bounded.
        let very_deep = "[".repeat(100_000) + &"]".repeat(100_000);
        assert_eq!(parse(&very_deep).unwrap_err().kind(), ErrorKind::NestingTooDeep);

        let err = parse_with_limits("[1, 2, 3]", Limits::default().with_max_input_size(8)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooLarge);
    }

    #[test]
    fn test_edit_then_serialize() {
        let mut doc = parse(r#"{"items":[1,2,3],"meta":{"v":1}}"#).unwrap();

        doc["items"].to_array_mut().unwrap().erase(0..2).unwrap();
        doc["items"].to_array_mut().unwrap().push("four");
        doc["meta"].to_object_mut().unwrap().remove("v");
        doc["meta"]["added"] = Value::from(true);
        *doc.entry("new").unwrap() = Value::from(Array::new());

        assert_eq!(
            doc.to_string(),
            r#"{"items":[3,"four"],"meta":{"added":true},"new":[]}"#
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let original = parse(r#"{"list":[{"x":1}]}"#).unwrap();
        let mut copy = original.clone();
        copy["list"][0]["x"] = Value::from("changed");
        assert_eq!(original.to_string(), r#"{"list":[{"x":1}]}"#);
        assert_eq!(copy.to_string(), r#"{"list":[{"x":"changed"}]}"#);
    }

    #[test]
    fn test_pretty_print() {
        let mut inner = Object::new();
        inner.insert("sub_key", 2u8);
        let mut outer = Object::new();
        outer.insert("items", Array::from_iter([Value::from(1u8), Value::Null]));
        outer.insert("key", "value");
        outer.insert("sub", inner);
        outer.insert("empty", Array::new());

        let expected = r#"{
  "empty": [],
  "items": [
    1,
    null
  ],
  "key": "value",
  "sub": {
    "sub_key": 2
  }
}"#;
        assert_eq!(Value::from(outer).to_string_pretty(), expected);
    }

    #[test]
    fn test_from_str() {
        let value: Value = r#"["x"]"#.parse().unwrap();
        assert_eq!(value[0], Value::from("x"));
        assert_eq!(
            "nope".parse::<Value>().unwrap_err().kind(),
            ErrorKind::NotJson
        );
    }
}
