//! Canonical language vocabulary for the Brace front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the lexer, the parser and any
//! tooling share, so that spellings like `"+="` or `"while"` live in exactly one place.
//!
//! ## Notes
//!
//! - **No IO**, no global state, and no syntax-tree types.
//! - Scope: reserved keywords, operators (with binary precedence and compound-assignment metadata) and punctuators.

pub mod lang;
