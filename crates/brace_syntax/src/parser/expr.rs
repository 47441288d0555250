/// Expression parsing.
///
/// One method per precedence level, lowest binding first:
///
/// | level      | operators         |
/// |------------|-------------------|
/// | equality   | `==` `!=`         |
/// | comparison | `<` `<=` `>` `>=` |
/// | cast       | `as <type>`       |
/// | term       | `+` `-`           |
/// | factor     | `*` `/`           |
/// | remainder  | `%`               |
/// | unary      | prefix `-` `!`    |
///
/// Binary levels are left-associative.
const EQUALITY_OPS: &[(OperatorId, BinaryOp)] = &[(OperatorId::EqEq, BinaryOp::Eq), (OperatorId::NotEq, BinaryOp::NotEq)];

const COMPARISON_OPS: &[(OperatorId, BinaryOp)] = &[
    (OperatorId::Lt, BinaryOp::Lt),
    (OperatorId::LtEq, BinaryOp::LtEq),
    (OperatorId::Gt, BinaryOp::Gt),
    (OperatorId::GtEq, BinaryOp::GtEq),
];

const TERM_OPS: &[(OperatorId, BinaryOp)] = &[(OperatorId::Plus, BinaryOp::Add), (OperatorId::Minus, BinaryOp::Sub)];

const FACTOR_OPS: &[(OperatorId, BinaryOp)] = &[(OperatorId::Star, BinaryOp::Mul), (OperatorId::Slash, BinaryOp::Div)];

const REMAINDER_OPS: &[(OperatorId, BinaryOp)] = &[(OperatorId::Percent, BinaryOp::Rem)];

impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Node, CompileError> {
        self.nested(Nesting::Expression, Self::equality)
    }

    fn equality(&mut self) -> Result<Node, CompileError> {
        self.binary_level(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Node, CompileError> {
        self.binary_level(COMPARISON_OPS, Self::cast)
    }

    /// Zero or more `as <type>` suffixes, each wrapping everything to its left.
    fn cast(&mut self) -> Result<Node, CompileError> {
        let mut expr = self.term()?;
        while self.match_contextual("as") {
            let target_type = self.type_name("Expected type after 'as'")?;
            expr = Node::cast(expr, target_type);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Node, CompileError> {
        self.binary_level(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> Result<Node, CompileError> {
        self.binary_level(FACTOR_OPS, Self::remainder)
    }

    fn remainder(&mut self) -> Result<Node, CompileError> {
        self.binary_level(REMAINDER_OPS, Self::unary)
    }

    /// Parse a left-associative chain `operand (op operand)*` for one precedence level.
    fn binary_level(
        &mut self,
        table: &[(OperatorId, BinaryOp)],
        operand: fn(&mut Self) -> Result<Node, CompileError>,
    ) -> Result<Node, CompileError> {
        let mut expr = operand(self)?;
        while let Some(op) = self.match_binary(table) {
            let right = operand(self)?;
            expr = Node::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// Prefix `-` / `!`, right-recursive so `--x` and `!!x` nest.
    fn unary(&mut self) -> Result<Node, CompileError> {
        let prefix = self
            .peek()
            .operator_id()
            .filter(|id| operators::is_prefix(*id))
            .and_then(UnaryOp::from_operator);

        if let Some(op) = prefix {
            self.advance();
            let operand = self.nested(Nesting::Expression, Self::unary)?;
            return Ok(Node::unary(op, operand));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Node, CompileError> {
        let category = self.peek().category;
        let node = match category {
            TokenCategory::IntegerLiteral => Node::IntegerLiteral(self.peek().value.clone()),
            TokenCategory::FloatLiteral => Node::FloatLiteral(self.peek().value.clone()),
            TokenCategory::BooleanLiteral => Node::BooleanLiteral(self.peek().value == "true"),
            TokenCategory::StringLiteral => Node::StringLiteral(self.peek().value.clone()),
            TokenCategory::Identifier => {
                if self.peek_next().is_punctuation(PunctuationId::LParen) {
                    return self.call();
                }
                Node::variable(self.peek().value.clone())
            }
            TokenCategory::Punctuator if self.check_punct(PunctuationId::LParen) => {
                self.advance();
                let expr = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
                return Ok(expr);
            }
            _ => return Err(self.unexpected_token()),
        };
        self.advance();
        Ok(node)
    }

    /// `<name> ( [<expr> {, <expr>}] )`
    ///
    /// Used both as an expression and, followed by `;`, as a statement.
    fn call(&mut self) -> Result<Node, CompileError> {
        let identifier = self.identifier("Expected function name")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after function name")?;

        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;

        Ok(Node::call(identifier, args))
    }

    /// Error for a token that cannot start an expression.
    fn unexpected_token(&self) -> CompileError {
        if self.is_at_end() {
            return CompileError::syntax("Unexpected end of input".to_string(), self.current_span())
                .with_hint("an expression was expected here");
        }

        let token = self.peek();
        let err = CompileError::syntax(format!("Unexpected token '{}'", token.value), token.span);
        match token.keyword_id() {
            Some(id) if keywords::status(id) == KeywordStatus::Reserved => err.with_hint(format!(
                "`{}` is reserved but not supported yet; declare variables as `<type> <name> = <value>;`",
                token.value
            )),
            _ => err,
        }
    }
}
