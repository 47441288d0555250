//! Token types for the Brace lexer.
//!
//! A token is a category plus the exact text it matched. Keyword, operator and punctuator tokens can be resolved to
//! registry IDs from `brace_core::lang` through the helpers in `crate::token_helpers`.
//!
//! ## Notes
//! - String literal values exclude the surrounding quotes; the span still covers them.
//! - Tokens are immutable once produced.

use std::fmt;

use crate::ast::Span;
use brace_core::lang::keywords::{self, KeywordId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Category of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Punctuator,
    Keyword,
    Identifier,
    Operator,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    StringLiteral,
    /// Reserved; the current scanning rules never produce it.
    LineComment,
    /// Reserved; the current scanning rules never produce it.
    BlockComment,
    Unknown,
}

impl TokenCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Punctuator => "punctuator",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Operator => "operator",
            TokenCategory::IntegerLiteral => "integer_literal",
            TokenCategory::FloatLiteral => "float_literal",
            TokenCategory::BooleanLiteral => "boolean_literal",
            TokenCategory::StringLiteral => "string_literal",
            TokenCategory::LineComment => "line_comment",
            TokenCategory::BlockComment => "block_comment",
            TokenCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its category, matched text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(category: TokenCategory, value: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            value: value.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): '{}'", self.category, self.value)
    }
}

/// Resolve a word spelling to a keyword id, if it is reserved. Unlike [`Token::keyword_id`] this ignores category.
pub fn reserved_word(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
