#![no_main]

use libfuzzer_sys::fuzz_target;
use strict_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Scanning and parsing are total: both always produce output
        let lexed = lexer::lex(s);
        assert!(lexed.tokens.last().is_some_and(|t| t.is_end_of_file()));
        let _ = parser::parse("Fuzz.strict", s);
    }
});
