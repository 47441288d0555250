//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::convert::Infallible;
use std::fs;

use miette::{NamedSource, Report};

use crate::evaluator::Evaluator;
use crate::frontend::ast::{FunctionDeclaration, Program};
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser};
use crate::pipeline::{self, RunError};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (16 MiB)
///
/// Files larger than this are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Name shown in diagnostics for `-c` source.
const INLINE_SOURCE_NAME: &str = "<command>";

/// How compile errors are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticStyle {
    /// miette's graphical report with a labelled source snippet
    #[default]
    Graphical,
    /// `file:line:col` text with a caret line
    Plain,
}

/// Read a source file, refusing anything over [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a compile error against its source.
pub fn render_error(file_name: &str, source: &str, err: &CompileError, style: DiagnosticStyle) -> String {
    match style {
        DiagnosticStyle::Plain => diagnostics::format_error(file_name, source, err),
        DiagnosticStyle::Graphical => {
            let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
            format!("{:?}", report)
        }
    }
}

fn compile_failure(file_name: &str, source: &str, err: &CompileError, style: DiagnosticStyle) -> CliError {
    CliError::failure(render_error(file_name, source, err, style).trim_end())
}

/// Tokenize a file and print one token per line.
pub fn lex_file(file_path: &str, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|err| compile_failure(file_path, &source, &err, style))?;

    for token in &tokens {
        println!("{}", token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print the AST.
pub fn parse_file(file_path: &str, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|err| compile_failure(file_path, &source, &err, style))?;
    let program = parser::parse(&tokens).map_err(|err| compile_failure(file_path, &source, &err, style))?;

    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}

/// Lex and parse a file, printing the function signatures on success.
pub fn check_file(file_path: &str, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    check_source(file_path, &source, style)
}

/// Lex and parse inline `-c` source.
pub fn check_inline(code: &str, style: DiagnosticStyle) -> CliResult<ExitCode> {
    if code.trim().is_empty() {
        return Err(CliError::failure("Error: -c/--command requires source code string"));
    }
    check_source(INLINE_SOURCE_NAME, code, style)
}

fn check_source(file_name: &str, source: &str, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let mut report = SignatureReport::default();
    match pipeline::run_with(source, &mut report) {
        Ok(()) => {
            println!("✓ Parsed {} function(s)", report.signatures.len());
            for signature in &report.signatures {
                println!("  {}", signature);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(RunError::Compile(err)) => Err(compile_failure(file_name, source, &err, style)),
        Err(err) => Err(CliError::failure(format!("Error: {}", err))),
    }
}

// ============================================================================
// Signature report
// ============================================================================

/// Evaluator that records each function's signature instead of executing it.
#[derive(Debug, Default)]
pub struct SignatureReport {
    pub signatures: Vec<String>,
}

impl Evaluator for SignatureReport {
    type Error = Infallible;

    fn execute(&mut self, program: Program) -> Result<(), Infallible> {
        self.signatures = program.functions().map(signature).collect();
        Ok(())
    }
}

/// Render `int32 add(int32 a, int32 b)`.
pub fn signature(func: &FunctionDeclaration) -> String {
    let params: Vec<String> = func.params().map(|(ty, name)| format!("{} {}", ty, name)).collect();
    format!("{} {}({})", func.return_type, func.identifier, params.join(", "))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_report() {
        let mut report = SignatureReport::default();
        pipeline::run_with("int32 add(int32 a, int32 b) { return a + b; } void main() {}", &mut report).unwrap();
        assert_eq!(report.signatures, vec!["int32 add(int32 a, int32 b)", "void main()"]);
    }

    #[test]
    fn test_render_plain_error() {
        let source = "void main() { return 1 }";
        let err = crate::compile(source).unwrap_err();
        let rendered = render_error("main.brc", source, &err, DiagnosticStyle::Plain);
        assert!(rendered.starts_with("syntax error: Expected ';' after return, found '}'"), "{}", rendered);
        assert!(rendered.contains("--> main.brc:1:24"), "{}", rendered);
    }

    #[test]
    fn test_render_graphical_error_mentions_message() {
        let source = "void main() { @ }";
        let err = crate::compile(source).unwrap_err();
        let rendered = render_error("main.brc", source, &err, DiagnosticStyle::Graphical);
        assert!(rendered.contains("Unexpected character '@'"), "{}", rendered);
    }

    #[test]
    fn test_check_inline() {
        assert_eq!(check_inline("void main() {}", DiagnosticStyle::Plain).unwrap(), ExitCode::SUCCESS);
        assert!(check_inline("   ", DiagnosticStyle::Plain).is_err());

        let err = check_inline("void main() { let x = 1; }", DiagnosticStyle::Plain).unwrap_err();
        assert!(err.message.contains("<command>:1:15"), "{}", err.message);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.brc").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_check_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("brace_check_{}.brc", std::process::id()));
        fs::write(&path, "void main() { print(\"hi\"); }\n").unwrap();
        let result = check_file(&path.to_string_lossy(), DiagnosticStyle::Plain);
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }
}
