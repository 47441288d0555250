//! Syntax frontend for the Brace language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI and by evaluators.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or check types.
//! - Vocabulary identity (keywords/operators/punctuators) comes from `brace_core::lang` registries.
//! - Both stages fail fast: the first lexical or syntax error aborts and no partial output is returned.
//!
//! ## Examples
//! ```rust
//! use brace_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("void main() { return; }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
