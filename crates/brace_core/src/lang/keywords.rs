//! Define the reserved keyword vocabulary for the Brace language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, categories and whether the grammar currently gives
//! the word any meaning.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `true` and `false` are reserved here but the lexer classifies them as boolean literals.
//! - Words with [`KeywordStatus::Reserved`] are rejected as identifiers yet have no statement form.
//!
//! ## Examples
//! ```rust
//! use brace_core::lang::keywords::{self, KeywordId, KeywordStatus};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("whilex"), None);
//! assert_eq!(keywords::status(KeywordId::Let), KeywordStatus::Reserved);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Bindings / definitions
    Let,
    Var,
    Const,
    Function,

    // Control flow
    Return,
    If,
    Else,
    For,
    While,
    Break,
    Continue,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Binding,
    Literal,
}

/// Whether the grammar currently consumes a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordStatus {
    /// The parser has a rule that consumes this word.
    Active,
    /// Reserved for future use; no parsing rule consumes it.
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub status: KeywordStatus,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Let, "let", KeywordCategory::Binding, KeywordStatus::Reserved),
    info(KeywordId::Var, "var", KeywordCategory::Binding, KeywordStatus::Reserved),
    info(KeywordId::Const, "const", KeywordCategory::Binding, KeywordStatus::Reserved),
    info(KeywordId::Function, "function", KeywordCategory::Definition, KeywordStatus::Reserved),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, KeywordStatus::Active),
    info(KeywordId::True, "true", KeywordCategory::Literal, KeywordStatus::Active),
    info(KeywordId::False, "false", KeywordCategory::Literal, KeywordStatus::Active),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, KeywordStatus::Active),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, KeywordStatus::Active),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, KeywordStatus::Reserved),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, KeywordStatus::Active),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, KeywordStatus::Reserved),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, KeywordStatus::Reserved),
];

/// Canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Grammar status of a keyword.
pub fn status(id: KeywordId) -> KeywordStatus {
    info_for(id).status
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, status: KeywordStatus) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        status,
    }
}
