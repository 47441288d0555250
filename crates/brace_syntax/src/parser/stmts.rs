/// Statement parsing.
///
/// [`Parser::statement`] dispatches on the current token (and, for assignments, calls and declarations, on one
/// or two tokens of lookahead). Every simple statement ends in a mandatory `;`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Node, CompileError> {
        self.nested(Nesting::Statement, Self::statement_inner)
    }

    fn statement_inner(&mut self) -> Result<Node, CompileError> {
        if self.check_punct(PunctuationId::LBrace) {
            return self.block();
        }
        // A stray `else` takes the same path as `if`
        if self.check_keyword(KeywordId::If) || self.check_keyword(KeywordId::Else) {
            return self.conditional();
        }
        if self.check_keyword(KeywordId::While) {
            return self.while_loop();
        }
        if self.check_keyword(KeywordId::Return) {
            return self.return_statement();
        }
        if self.peek().is_identifier() {
            if self.peek_next().operator_id().is_some_and(operators::is_assignment) {
                return self.assignment();
            }
            if self.peek_next().is_punctuation(PunctuationId::LParen) {
                return self.call_statement();
            }
        }
        if self.is_declaration_start() {
            return self.variable_declaration();
        }
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(Node::Empty);
        }
        self.expression_statement()
    }

    /// `{ <statement>* }`
    fn block(&mut self) -> Result<Node, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "Expected '{'")?;

        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) {
            if self.is_at_end() {
                return Err(self.error("Expected '}' to close block"));
            }
            statements.push(self.statement()?);
        }
        self.advance();

        Ok(Node::Scope(ScopeDeclaration { statements }))
    }

    /// `if ( <expr> ) <statement> [else <statement>]`
    fn conditional(&mut self) -> Result<Node, CompileError> {
        let keyword = self.advance().value.clone();
        self.expect_punct(PunctuationId::LParen, &format!("Expected '(' after '{}'", keyword))?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let pass = self.statement()?;

        let fail = if self.check_keyword(KeywordId::Else) {
            self.advance();
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Node::Conditional(ConditionalStatement {
            condition: Box::new(condition),
            pass: Box::new(pass),
            fail,
        }))
    }

    /// `while ( <expr> ) <statement>`
    fn while_loop(&mut self) -> Result<Node, CompileError> {
        self.advance();
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'while'")?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let body = self.statement()?;

        Ok(Node::WhileLoop(WhileLoopStatement {
            condition: Box::new(condition),
            body: Box::new(body),
        }))
    }

    /// `return [<expr>] ;`
    fn return_statement(&mut self) -> Result<Node, CompileError> {
        self.advance();
        let expr = if self.check_punct(PunctuationId::Semicolon) {
            Node::Empty
        } else {
            self.expression()?
        };
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after return")?;

        Ok(Node::Return(ReturnStatement { expr: Box::new(expr) }))
    }

    /// `<name> = <expr> ;` and the compound forms `<name> op= <expr> ;`.
    ///
    /// `x op= e` is rewritten to `x = x op e` here, so later stages only ever see plain assignment.
    fn assignment(&mut self) -> Result<Node, CompileError> {
        let identifier = self.identifier("Expected variable name")?;
        let operator = self.advance().operator_id();
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after assignment")?;

        let value = match operator
            .and_then(operators::compound_base)
            .and_then(BinaryOp::from_operator)
        {
            Some(op) => Node::binary(Node::variable(identifier.clone()), op, value),
            None => value,
        };

        Ok(Node::VariableAssignment(VariableAssignment {
            identifier,
            value: Box::new(value),
        }))
    }

    /// `<name> ( <args> ) ;`
    fn call_statement(&mut self) -> Result<Node, CompileError> {
        let call = self.call()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after function call")?;
        Ok(call)
    }

    /// `<expr> ;`
    fn expression_statement(&mut self) -> Result<Node, CompileError> {
        let expr = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after expression")?;
        Ok(expr)
    }
}
