//! Source-to-AST pipeline.
//!
//! `compile` chains the lexer and parser; the `Result` it returns is the whole success/failure contract. On
//! failure there is no partial program to inspect.

use thiserror::Error;

use crate::evaluator::Evaluator;
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::{lexer, parser};

/// Lex and parse `source` into a [`Program`].
///
/// ## Errors
/// Returns the first lexical or syntax error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile(source: &str) -> Result<Program, CompileError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse(&tokens)?;
    tracing::debug!(functions = program.declarations.len(), "compiled source");
    Ok(program)
}

/// Failure from [`run_with`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The source was rejected; the evaluator was never invoked.
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("evaluation failed: {0}")]
    Evaluate(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Compile `source` and hand the program to `evaluator`.
///
/// The evaluator is only called when compilation succeeds.
pub fn run_with<E: Evaluator>(source: &str, evaluator: &mut E) -> Result<(), RunError> {
    let program = compile(source)?;
    evaluator
        .execute(program)
        .map_err(|err| RunError::Evaluate(Box::new(err)))
}
