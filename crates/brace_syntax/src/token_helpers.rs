//! Small helper APIs for working with `Token` / `TokenCategory`.
//!
//! Tokens keep their matched text, so these helpers resolve that text against the `brace_core` registries. Every
//! lookup is category-aware: a string literal whose text happens to be `;` is never a punctuator.

use crate::lexer::{Token, TokenCategory};
use brace_core::lang::keywords::{self, KeywordId};
use brace_core::lang::operators::{self, OperatorId};
use brace_core::lang::punctuation::{self, PunctuationId};

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.category {
            TokenCategory::Keyword => keywords::from_str(&self.value),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.category {
            TokenCategory::Operator => operators::from_str(&self.value),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self.category {
            TokenCategory::Punctuator => punctuation::from_str(&self.value),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }

    pub fn is_identifier(&self) -> bool {
        self.category == TokenCategory::Identifier
    }

    /// Return `true` if this token can name a type.
    ///
    /// There are no reserved type names, so any identifier (including `void`) qualifies.
    pub fn is_type_capable(&self) -> bool {
        self.is_identifier()
    }

    /// Return `true` if this is an identifier spelled exactly `word` (contextual keywords such as `as`).
    pub fn is_word(&self, word: &str) -> bool {
        self.is_identifier() && self.value == word
    }
}
