//! Seam between the front end and an execution engine.
//!
//! The front end stops at a finished [`Program`]; whatever runs it implements [`Evaluator`] and takes ownership
//! of the tree. [`crate::pipeline::run_with`] only calls an evaluator after lexing and parsing both succeed.

use crate::frontend::ast::Program;

/// Something that consumes a parsed program.
pub trait Evaluator {
    /// Failure raised while executing the program.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute `program`, taking ownership of the AST.
    fn execute(&mut self, program: Program) -> Result<(), Self::Error>;
}
