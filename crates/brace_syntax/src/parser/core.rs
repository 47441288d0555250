/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.

/// Maximum depth of nested statements (blocks and `if`/`while` bodies).
pub const MAX_STATEMENT_NESTING: usize = 256;

/// Maximum depth of nested expressions (parentheses, call arguments and prefix operators).
pub const MAX_EXPRESSION_NESTING: usize = 256;

/// Which depth counter a recursive rule charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Statement,
    Expression,
}

impl Nesting {
    fn limit(self) -> usize {
        match self {
            Nesting::Statement => MAX_STATEMENT_NESTING,
            Nesting::Expression => MAX_EXPRESSION_NESTING,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Nesting::Statement => "Statement",
            Nesting::Expression => "Expression",
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: every rule returns `Result` and the first error
///   propagates straight out of [`Parser::parse`] with no partial tree.
/// - Reading past the last token yields an end-of-input sentinel instead of going out of bounds.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    statement_depth: usize,
    expression_depth: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `brace_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            statement_depth: 0,
            expression_depth: 0,
            eof: Token::new(TokenCategory::Unknown, "", Span::new(end, end)),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] encountered; nothing parsed before it is kept.
    pub fn parse(mut self) -> Result<Program, CompileError> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            declarations.push(self.global_statement()?);
        }
        Ok(Program { declarations })
    }
}
