//! Diagnostics and error reporting for Brace
//!
//! Both front-end stages fail fast, so every failure is a single [`CompileError`] pointing at the first offending
//! token or character. Errors implement [`miette::Diagnostic`] for rich rendering and can also be rendered as a
//! plain `file:line:col` report with [`format_error`].

use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;

/// A front-end error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind,
            hints: Vec::new(),
        }
    }

    /// An unrecognized character or an unterminated string literal.
    pub fn lexical(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    /// A missing token, or a token no grammar rule accepts here.
    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "brace::lexical",
            ErrorKind::Syntax => "brace::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new(Some(self.kind.to_string()), self.span.start, self.span.len());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render an error with source context as plain text.
///
/// ```text
/// syntax error: Expected ';' after return, found '}'
///   --> main.brc:1:24
///    |
///  1 | void main() { return 1 }
///    |                        ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let gutter = line_num.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {:>width$} |\n", "", width = gutter));
    out.push_str(&format!("  {:>width$} | {}\n", line_num, line_text, width = gutter));

    // Underline the span, clipped to the reported line
    let remaining = line_text.chars().count().saturating_sub(col_num - 1);
    let underline_len = error.span.len().min(remaining).max(1);
    out.push_str(&format!(
        "  {:>width$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = gutter
    ));

    for hint in &error.hints {
        out.push_str(&format!("  = help: {}\n", hint));
    }

    out
}

/// Get line number, column number (both 1-based), and line text for a byte offset
pub fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = source[..line_start].matches('\n').count() + 1;
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_info() {
        let source = "void main() {\n  x = 1\n}\n";
        assert_eq!(get_line_info(source, 0), (1, 1, "void main() {"));
        let offset = source.find("x =").unwrap();
        assert_eq!(get_line_info(source, offset), (2, 3, "  x = 1"));
        assert_eq!(get_line_info(source, source.len()), (4, 1, ""));
    }

    #[test]
    fn test_format_error_points_at_span() {
        let source = "void main() { return 1 }";
        let offset = source.find('}').unwrap();
        let err = CompileError::syntax(
            "Expected ';' after return, found '}'".to_string(),
            Span::new(offset, offset + 1),
        );
        let rendered = format_error("main.brc", source, &err);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "syntax error: Expected ';' after return, found '}'");
        assert_eq!(lines[1], "  --> main.brc:1:24");
        assert_eq!(lines[3], "  1 | void main() { return 1 }");
        assert_eq!(lines[4], format!("    | {}^", " ".repeat(23)));
    }

    #[test]
    fn test_hints_render_as_help() {
        let err = CompileError::lexical("Unterminated string literal".to_string(), Span::new(0, 3))
            .with_hint("add a closing '\"'");
        let rendered = format_error("x.brc", "\"ab", &err);
        assert!(rendered.starts_with("lexical error: Unterminated string literal"));
        assert!(rendered.contains("^^^"));
        assert!(rendered.contains("= help: add a closing '\"'"));
        assert_eq!(err.help().map(|h| h.to_string()), Some("add a closing '\"'".to_string()));
    }

    #[test]
    fn test_diagnostic_metadata() {
        let err = CompileError::syntax("Unexpected global statement".to_string(), Span::new(2, 5));
        assert_eq!(err.to_string(), "syntax error: Unexpected global statement");
        assert_eq!(err.code().map(|c| c.to_string()), Some("brace::syntax".to_string()));
        let labels: Vec<LabeledSpan> = err.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 3);
        assert!(err.is_syntax());
        assert!(!err.is_lexical());
    }
}
