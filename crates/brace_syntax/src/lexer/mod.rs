//! Lexer for the Brace programming language
//!
//! A single left-to-right pass with one character of lookahead (two for the `12.5` float check). Handles:
//! - Keywords, identifiers and boolean literals
//! - Integer and float literals (no sign, no exponent)
//! - Operators and punctuators, extended by maximal munch against the `brace_core` registries
//! - Double-quoted string literals (raw, no escape processing)
//!
//! The first unrecognized character or unterminated string aborts the whole pass.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenCategory, Token)

pub mod tokens;

pub use tokens::{Token, TokenCategory, reserved_word};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use brace_core::lang::keywords::KeywordId;
use brace_core::lang::operators;
use brace_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Brace source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns the complete token sequence, or the first lexical error. No end-of-file token is appended; the
    /// parser supplies its own end-of-input sentinel.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        loop {
            self.skip_whitespace();
            let start = self.current_pos;
            let Some(c) = self.advance() else {
                break;
            };
            self.scan_token(start, c)?;
        }

        tracing::debug!(token_count = self.tokens.len(), "lexed source");
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current_pos..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn add_token(&mut self, category: TokenCategory, start: usize) {
        let value = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(category, value, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self, start: usize, c: char) -> Result<(), CompileError> {
        let mut buf = [0u8; 4];
        let first: &str = c.encode_utf8(&mut buf);

        match c {
            _ if is_ident_start(c) => self.scan_identifier(start),
            '0'..='9' => self.scan_number(start),
            '"' => return self.scan_string(start),
            _ if operators::from_str(first).is_some() => {
                self.munch(start, TokenCategory::Operator, |s| operators::from_str(s).is_some())
            }
            _ if punctuation::from_str(first).is_some() => {
                self.munch(start, TokenCategory::Punctuator, |s| punctuation::from_str(s).is_some())
            }
            _ => {
                return Err(CompileError::lexical(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
        Ok(())
    }

    /// Maximal munch: keep extending while the accumulated text is still a known spelling.
    fn munch(&mut self, start: usize, category: TokenCategory, is_known: fn(&str) -> bool) {
        while let Some(next) = self.peek() {
            let end = self.current_pos + next.len_utf8();
            if is_known(&self.source[start..end]) {
                self.advance();
            } else {
                break;
            }
        }
        self.add_token(category, start);
    }

    // ========================================================================
    // Literal and identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        let category = match reserved_word(spelling) {
            Some(KeywordId::True | KeywordId::False) => TokenCategory::BooleanLiteral,
            Some(_) => TokenCategory::Keyword,
            None => TokenCategory::Identifier,
        };
        self.add_token(category, start);
    }

    fn scan_number(&mut self, start: usize) {
        self.skip_digits();

        // `12.5` is a float; `12.` is an integer followed by a `.` punctuator
        let mut category = TokenCategory::IntegerLiteral;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
            category = TokenCategory::FloatLiteral;
        }
        self.add_token(category, start);
    }

    fn skip_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan a string literal whose opening quote has been consumed.
    fn scan_string(&mut self, start: usize) -> Result<(), CompileError> {
        let content_start = self.current_pos;
        loop {
            match self.advance() {
                Some('"') => break,
                Some(_) => {}
                None => {
                    return Err(CompileError::lexical(
                        "Unterminated string literal".to_string(),
                        Span::new(start, self.current_pos),
                    )
                    .with_hint("add a closing '\"' before the end of the input"));
                }
            }
        }

        let content_end = self.current_pos - 1;
        let value = &self.source[content_start..content_end];
        self.tokens.push(Token::new(
            TokenCategory::StringLiteral,
            value,
            Span::new(start, self.current_pos),
        ));
        Ok(())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII letters only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier (ASCII letters and digits).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
