//! Brace front end
//!
//! This module re-exports the syntax components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: error reporting
//! - `token_helpers`: registry lookups on tokens
//!
//! Vocabulary registries live in `lang` (re-exported from `brace_core`).

// Syntax components are provided by the shared brace_syntax crate.
pub use brace_syntax::{ast, diagnostics, lexer, parser, token_helpers};

pub use brace_core::lang;
