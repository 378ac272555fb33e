#![no_main]
use libfuzzer_sys::fuzz_target;

use plain_json::{parse, parse_with_limits, Limits};
use serde::de::IgnoredAny;

/// Kept under serde_json's own recursion limit so it can check our output.
const MAX_DEPTH: usize = 100;

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes.
    // We only care about inputs that are valid UTF-8.
    if let Ok(s) = std::str::from_utf8(data) {
        // Any input must either parse or return an error, never panic.
        // Whatever parses must print to valid JSON that parses back to
        // the same tree.
        let limits = Limits::default().with_max_depth(MAX_DEPTH);
        if let Ok(value) = parse_with_limits(s, limits) {
            let compact = value.to_string();
            // Ignoring the value still checks the full grammar, without
            // range-checking numbers kept as text.
            serde_json::from_str::<IgnoredAny>(&compact)
                .expect("compact output should be valid JSON");
            let reparsed = parse(&compact).expect("compact output should parse");
            assert_eq!(reparsed, value);

            let pretty = value.to_string_pretty();
            serde_json::from_str::<IgnoredAny>(&pretty)
                .expect("pretty output should be valid JSON");
            assert_eq!(parse(&pretty).expect("pretty output should parse"), value);
        }
    }
});
