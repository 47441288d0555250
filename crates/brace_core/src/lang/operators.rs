//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser and tooling share: binary
//! precedence (higher binds tighter), prefix usability, and which binary operator a compound assignment desugars to.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; it is what the lexer uses for maximal munch.
//! - Binary operators are all left-associative.
//! - The `as` cast suffix is contextual (an identifier spelling), so it is not listed here; it sits between
//!   [`Precedence::Comparison`] and [`Precedence::Term`].
//!
//! ## Examples
//! ```rust
//! use brace_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("+="), Some(OperatorId::PlusEq));
//! assert_eq!(operators::compound_base(OperatorId::PlusEq), Some(OperatorId::Plus));
//! assert_eq!(operators::precedence(OperatorId::Star), Some(Precedence::Factor));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Logical
    Bang,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
}

/// Broad grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Logical,
    Comparison,
    Assignment,
}

/// Binary precedence levels, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Equality,
    Comparison,
    Term,
    Factor,
    Remainder,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is `None` for operators that never appear in infix position (`!`, assignments).
/// - `compound_of` names the binary operator an `op=` assignment is rewritten to.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub precedence: Option<Precedence>,
    pub prefix: bool,
    pub compound_of: Option<OperatorId>,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Eq, "=", OperatorCategory::Assignment, None, false, None),
    // Logical
    op(OperatorId::Bang, "!", OperatorCategory::Logical, None, true, None),
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic, Some(Precedence::Term), false, None),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic, Some(Precedence::Term), true, None),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic, Some(Precedence::Factor), false, None),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic, Some(Precedence::Factor), false, None),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic, Some(Precedence::Remainder), false, None),
    // Compound assignment
    op(OperatorId::PlusEq, "+=", OperatorCategory::Assignment, None, false, Some(OperatorId::Plus)),
    op(OperatorId::MinusEq, "-=", OperatorCategory::Assignment, None, false, Some(OperatorId::Minus)),
    op(OperatorId::StarEq, "*=", OperatorCategory::Assignment, None, false, Some(OperatorId::Star)),
    op(OperatorId::SlashEq, "/=", OperatorCategory::Assignment, None, false, Some(OperatorId::Slash)),
    op(OperatorId::PercentEq, "%=", OperatorCategory::Assignment, None, false, Some(OperatorId::Percent)),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison, Some(Precedence::Equality), false, None),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison, Some(Precedence::Equality), false, None),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison, Some(Precedence::Comparison), false, None),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison, Some(Precedence::Comparison), false, None),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison, Some(Precedence::Comparison), false, None),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison, Some(Precedence::Comparison), false, None),
];

/// Spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Binary precedence of an operator, if it is usable infix.
pub fn precedence(id: OperatorId) -> Option<Precedence> {
    info_for(id).precedence
}

/// Return `true` if the operator may appear in prefix position.
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).prefix
}

/// Return `true` if the operator is `=` or a compound assignment.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).category == OperatorCategory::Assignment
}

/// Binary operator a compound assignment rewrites to (`+=` → `+`).
pub fn compound_base(id: OperatorId) -> Option<OperatorId> {
    info_for(id).compound_of
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an exact operator spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    category: OperatorCategory,
    precedence: Option<Precedence>,
    prefix: bool,
    compound_of: Option<OperatorId>,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence,
        prefix,
        compound_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_assignments_map_to_infix_operators() {
        for info in OPERATORS {
            if let Some(base) = info.compound_of {
                assert!(is_assignment(info.id));
                assert!(precedence(base).is_some(), "{:?} desugars to non-infix {:?}", info.id, base);
                assert_eq!(info.spelling, format!("{}=", as_str(base)));
            }
        }
    }

    #[test]
    fn test_prefix_operators() {
        assert!(is_prefix(OperatorId::Minus));
        assert!(is_prefix(OperatorId::Bang));
        assert!(!is_prefix(OperatorId::Plus));
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(Precedence::Equality < Precedence::Comparison);
        assert!(Precedence::Term < Precedence::Factor);
        assert!(Precedence::Factor < Precedence::Remainder);
    }
}
