#![no_main]

use libfuzzer_sys::fuzz_target;
use luna_syntax::{parser, token_dump};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the dump reader
        if let Ok(tokens) = token_dump::read(s) {
            // If reading succeeds, fuzz the parser
            let _ = parser::parse_tokens(tokens);
        }
    }
});
