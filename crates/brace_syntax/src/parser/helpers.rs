/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_nth`, `advance`)
/// - Matching / expecting keywords, operators, punctuation and contextual words
/// - Error construction and the nesting guard
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_nth(1)
    }

    /// Return the token `n` positions ahead, or the end-of-input sentinel.
    fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end of input the cursor stays put and the sentinel is returned.
    fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(current).unwrap_or(&self.eof)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().is_operator(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a contextual keyword such as `as`, which lexes as an identifier.
    fn match_contextual(&mut self, word: &str) -> bool {
        if self.peek().is_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// If the current token is one of the operators in `table`, consume it and return its AST operator.
    fn match_binary(&mut self, table: &[(OperatorId, BinaryOp)]) -> Option<BinaryOp> {
        let id = self.peek().operator_id()?;
        let (_, op) = table.iter().find(|(candidate, _)| *candidate == id)?;
        self.advance();
        Some(*op)
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.error(msg))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Describe the current token for an error message.
    fn found(&self) -> String {
        let token = self.peek();
        match token.category {
            _ if self.is_at_end() => "end of input".to_string(),
            TokenCategory::StringLiteral => format!("'\"{}\"'", token.value),
            _ => format!("'{}'", token.value),
        }
    }

    /// Build a syntax error at the current token: `"{msg}, found {token}"`.
    fn error(&self, msg: &str) -> CompileError {
        CompileError::syntax(format!("{}, found {}", msg, self.found()), self.current_span())
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    fn depth_mut(&mut self, kind: Nesting) -> &mut usize {
        match kind {
            Nesting::Statement => &mut self.statement_depth,
            Nesting::Expression => &mut self.expression_depth,
        }
    }

    fn enter(&mut self, kind: Nesting) -> Result<(), CompileError> {
        if *self.depth_mut(kind) >= kind.limit() {
            return Err(CompileError::syntax(
                format!("{} nesting too deep (limit {})", kind.as_str(), kind.limit()),
                self.current_span(),
            ));
        }
        *self.depth_mut(kind) += 1;
        Ok(())
    }

    fn leave(&mut self, kind: Nesting) {
        let depth = self.depth_mut(kind);
        *depth = depth.saturating_sub(1);
    }

    /// Run `rule` one `kind` level deeper.
    fn nested(
        &mut self,
        kind: Nesting,
        rule: fn(&mut Self) -> Result<Node, CompileError>,
    ) -> Result<Node, CompileError> {
        self.enter(kind)?;
        let result = rule(self);
        self.leave(kind);
        result
    }
}
