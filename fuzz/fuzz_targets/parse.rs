#![no_main]

use brace::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is outside the lexer's input domain
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            // Every token must point back at its own text
            for token in &tokens {
                assert!(token.span.end <= s.len());
            }
            let _ = parser::parse(&tokens);
        }
    }
});
