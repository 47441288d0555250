/// Declaration parsing.
///
/// Covers the top-level rule (which only admits function declarations) and typed variable declarations, which
/// appear inside function bodies.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse one top-level form.
    ///
    /// Only `<type> <name> (` opens a valid global statement; everything else is rejected outright.
    fn global_statement(&mut self) -> Result<Node, CompileError> {
        if self.peek().is_type_capable()
            && self.peek_next().is_identifier()
            && self.peek_nth(2).is_punctuation(PunctuationId::LParen)
        {
            return self.function_declaration();
        }

        Err(self
            .error("Unexpected global statement")
            .with_hint("only function declarations are allowed at the top level, e.g. `void main() { ... }`"))
    }

    /// `<type> <name> ( [<type> <name> {, <type> <name>}] ) <statement>`
    fn function_declaration(&mut self) -> Result<Node, CompileError> {
        let return_type = self.type_name("Expected return type")?;
        let identifier = self.identifier("Expected function name")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after function name")?;

        let mut param_types = Vec::new();
        let mut param_identifiers = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                param_types.push(self.type_name("Expected parameter type")?);
                param_identifiers.push(self.identifier("Expected parameter name")?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;

        tracing::trace!(name = %identifier, arity = param_identifiers.len(), "parsing function body");
        let body = self.statement()?;

        Ok(Node::FunctionDeclaration(FunctionDeclaration {
            return_type,
            identifier,
            param_types,
            param_identifiers,
            body: Box::new(body),
        }))
    }

    /// Return `true` if the next three tokens read `<type> <name> =`.
    ///
    /// Pure lookahead: nothing is consumed when this returns `false`.
    fn is_declaration_start(&self) -> bool {
        self.peek().is_type_capable()
            && self.peek_next().is_identifier()
            && self.peek_nth(2).is_operator(OperatorId::Eq)
    }

    /// `<type> <name> = <expr> ;`
    fn variable_declaration(&mut self) -> Result<Node, CompileError> {
        let type_name = self.type_name("Expected variable type")?;
        let identifier = self.identifier("Expected variable name")?;
        self.expect_op(OperatorId::Eq, "Expected '=' after variable name")?;
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after variable declaration")?;

        Ok(Node::VariableDeclaration(VariableDeclaration {
            type_name,
            identifier,
            value: Box::new(value),
        }))
    }
}
