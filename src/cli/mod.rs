//! CLI module for the Brace front end
//!
//! ## Commands
//!
//! - `<file>` - Lex and parse a program (default action)
//! - `check <file>` / `check -c <code>` - Lex and parse a file or inline source
//! - `--lex <file>` - Print the token stream (debug)
//! - `--parse <file>` - Print the AST (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::DiagnosticStyle;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the Brace scripting language
#[derive(Parser, Debug)]
#[command(name = "brace")]
#[command(version)]
#[command(about = "Lex and parse Brace programs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Print diagnostics as plain text instead of graphical reports
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lex and parse a program, reporting the first error
    Check {
        /// Source file to check
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Check inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let style = if cli.plain {
        DiagnosticStyle::Plain
    } else {
        DiagnosticStyle::Graphical
    };

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), style);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), style);
    }

    match cli.command {
        Some(Command::Check { file, command }) => execute_check(file, command, style),
        None => {
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), style)
            } else {
                Err(CliError::failure("Error: no input file (try `brace --help`)"))
            }
        }
    }
}

/// Handle the `check` subcommand with its two forms.
fn execute_check(file: Option<PathBuf>, code: Option<String>, style: DiagnosticStyle) -> CliResult<ExitCode> {
    if let Some(code) = code {
        commands::check_inline(&code, style)
    } else if let Some(file) = file {
        commands::check_file(&file.to_string_lossy(), style)
    } else {
        Err(CliError::failure("Error: check requires a file path or -c \"code\""))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["brace", "main.brc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("main.brc")));
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["brace", "check", "main.brc"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { file: Some(_), command: None })));
    }

    #[test]
    fn test_cli_parse_check_with_code() {
        let cli = Cli::try_parse_from(["brace", "check", "-c", "void main() {}", "--plain"]).unwrap();
        if let Some(Command::Check { command, .. }) = cli.command {
            assert_eq!(command.as_deref(), Some("void main() {}"));
        } else {
            panic!("Expected Check command");
        }
        assert!(cli.plain);
    }

    #[test]
    fn test_cli_check_file_conflicts_with_code() {
        assert!(Cli::try_parse_from(["brace", "check", "main.brc", "-c", "void main() {}"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["brace", "--lex", "test.brc"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["brace", "--parse", "test.brc"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["brace", "--lex", "a.brc", "b.brc"]).is_err());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["brace"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_execute_inline_check() {
        let cli = Cli::try_parse_from(["brace", "check", "-c", "void main() { return; }"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

        let cli = Cli::try_parse_from(["brace", "--plain", "check", "-c", "x = 5;"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert!(err.message.contains("Unexpected global statement"), "{}", err.message);
    }
}
