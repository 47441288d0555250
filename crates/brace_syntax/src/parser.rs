//! Parser for the Brace programming language
//!
//! Converts a token stream into an AST by recursive descent, with one procedure per precedence level for
//! expressions. The first error aborts the parse.
//!
//! ## Examples
//!
//! ```rust
//! use brace_syntax::{lexer, parser};
//!
//! let source = "int32 add(int32 a, int32 b) { return a + b; }";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenCategory};
use brace_core::lang::keywords::{self, KeywordId, KeywordStatus};
use brace_core::lang::operators::{self, OperatorId};
use brace_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
