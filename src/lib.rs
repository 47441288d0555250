#![forbid(unsafe_code)]
//! Brace scripting language front end
//!
//! Brace is a small C-like scripting language. This crate wires the syntax front end (`brace_syntax`) into a
//! source-to-AST pipeline, defines the seam an execution engine plugs into, and provides the `brace` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups in `brace_core` use `.expect(...)` for entries that must exist; a panic
//!   there is a bug in the registry tables.
//!
//! ## Examples
//!
//! ```rust
//! let program = brace::compile("void main() { print(\"hi\"); }").unwrap();
//! assert_eq!(program.functions().count(), 1);
//!
//! assert!(brace::compile("x = 5;").is_err());
//! ```

pub mod cli;
pub mod evaluator;
pub mod frontend;
pub mod pipeline;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use evaluator::Evaluator;
pub use pipeline::{RunError, compile, run_with};
