#[cfg(test)]
/// Parser unit tests.
///
/// These cover the grammar forms, the precedence cascade, and the fail-fast error paths.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, CompileError> {
        let tokens = lexer::lex(source)?;
        parse(&tokens)
    }

    /// Parse `source` as the body of `void main() { ... }` and return its statements.
    fn parse_body(source: &str) -> Vec<Node> {
        let program = parse_str(&format!("void main() {{ {} }}", source))
            .unwrap_or_else(|err| panic!("failed to parse {:?}: {}", source, err));
        let main = program.function("main").expect("main should exist");
        match main.body.as_ref() {
            Node::Scope(scope) => scope.statements.clone(),
            other => panic!("expected block body, got {}", other),
        }
    }

    /// Parse a single expression through `return <expr>;`.
    fn parse_expr(source: &str) -> Node {
        match parse_body(&format!("return {};", source)).remove(0) {
            Node::Return(ret) => *ret.expr,
            other => panic!("expected return, got {}", other),
        }
    }

    fn syntax_error(source: &str) -> CompileError {
        let err = parse_str(source).expect_err("source should be rejected");
        assert!(err.is_syntax(), "expected a syntax error, got {}", err);
        err
    }

    #[test]
    fn test_parse_function() {
        let program = parse_str("int32 add(int32 a, int32 b) { return a + b; }").unwrap();
        assert_eq!(program.declarations.len(), 1);

        let add = program.function("add").unwrap();
        assert_eq!(add.return_type, "int32");
        assert_eq!(add.param_types, vec!["int32", "int32"]);
        assert_eq!(add.param_identifiers, vec!["a", "b"]);

        let expected = Node::Scope(ScopeDeclaration {
            statements: vec![Node::Return(ReturnStatement {
                expr: Box::new(Node::binary(Node::variable("a"), BinaryOp::Add, Node::variable("b"))),
            })],
        });
        assert_eq!(*add.body, expected);
    }

    #[test]
    fn test_parse_multiple_functions() {
        let program = parse_str("void a() {} float64 b(bool x) { return; } void c() ;").unwrap();
        let names: Vec<&str> = program.functions().map(|f| f.identifier.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(*program.function("c").unwrap().body, Node::Empty);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse(&[]).unwrap(), Program::default());
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse_expr("1 + 2 * 3").to_string(), "(+ 1 (* 2 3))");
        assert_eq!(parse_expr("1 * 2 % 3").to_string(), "(* 1 (% 2 3))");
        assert_eq!(parse_expr("a < b == c > d").to_string(), "(== (< a b) (> c d))");
        assert_eq!(parse_expr("(1 + 2) * 3").to_string(), "(* (+ 1 2) 3)");
    }

    #[test]
    fn test_left_associativity() {
        let expected = Node::binary(
            Node::binary(Node::IntegerLiteral("1".into()), BinaryOp::Sub, Node::IntegerLiteral("2".into())),
            BinaryOp::Sub,
            Node::IntegerLiteral("3".into()),
        );
        assert_eq!(parse_expr("1 - 2 - 3"), expected);
        assert_eq!(parse_expr("8 / 4 / 2").to_string(), "(/ (/ 8 4) 2)");
        assert_eq!(parse_expr("a == b != c").to_string(), "(!= (== a b) c)");
    }

    #[test]
    fn test_cast_binding() {
        let expected = Node::cast(
            Node::binary(Node::variable("a"), BinaryOp::Add, Node::variable("b")),
            "int32",
        );
        assert_eq!(parse_expr("a + b as int32"), expected);
        assert_eq!(parse_expr("x as int32 as float64").to_string(), "(as (as x int32) float64)");
        assert_eq!(parse_expr("a < b as float32").to_string(), "(< a (as b float32))");
    }

    #[test]
    fn test_cast_requires_type() {
        let err = syntax_error("void main() { return x as 5; }");
        assert!(err.message.contains("Expected type after 'as'"), "{}", err.message);
    }

    #[test]
    fn test_unary() {
        assert_eq!(parse_expr("--x").to_string(), "(- (- x))");
        assert_eq!(parse_expr("!!done").to_string(), "(! (! done))");
        assert_eq!(parse_expr("-a * b").to_string(), "(* (- a) b)");
        assert_eq!(parse_expr("-(a * b)").to_string(), "(- (* a b))");
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_expr("42"), Node::IntegerLiteral("42".into()));
        assert_eq!(parse_expr("4.25"), Node::FloatLiteral("4.25".into()));
        assert_eq!(parse_expr("true"), Node::BooleanLiteral(true));
        assert_eq!(parse_expr("false"), Node::BooleanLiteral(false));
        assert_eq!(parse_expr("\"hi there\""), Node::StringLiteral("hi there".into()));
    }

    #[test]
    fn test_call_expression() {
        assert_eq!(parse_expr("f()").to_string(), "(call f)");
        assert_eq!(parse_expr("f(1, g(x), y + 1)").to_string(), "(call f 1 (call g x) (+ y 1))");
    }

    #[test]
    fn test_call_rejects_trailing_comma() {
        let err = syntax_error("void main() { f(1,); }");
        assert!(err.message.contains("Unexpected token ')'"), "{}", err.message);
    }

    #[test]
    fn test_compound_assignment_desugars() {
        let stmts = parse_body("x += 1;");
        let expected = Node::VariableAssignment(VariableAssignment {
            identifier: "x".into(),
            value: Box::new(Node::binary(
                Node::variable("x"),
                BinaryOp::Add,
                Node::IntegerLiteral("1".into()),
            )),
        });
        assert_eq!(stmts, vec![expected]);

        let dumps: Vec<String> = parse_body("a -= 2; b *= c; d /= 4; e %= 5; f = 6;")
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            dumps,
            vec![
                "(set a (- a 2))",
                "(set b (* b c))",
                "(set d (/ d 4))",
                "(set e (% e 5))",
                "(set f 6)",
            ]
        );
    }

    #[test]
    fn test_variable_declaration() {
        let stmts = parse_body("int32 x = 5 + y;");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].to_string(), "(decl int32 x (+ 5 y))");
    }

    #[test]
    fn test_reserved_keyword_declaration_fails() {
        let err = syntax_error("void main() { let x = 5; }");
        assert!(err.message.contains("Unexpected token 'let'"), "{}", err.message);
        assert!(err.hints.iter().any(|h| h.contains("reserved")));
    }

    #[test]
    fn test_statements() {
        let stmts = parse_body(
            "if (x > 1) { y = 2; } else y = 3; while (i < 10) i += 1; print(\"done\"); ; return;",
        );
        let dumps: Vec<String> = stmts.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            dumps,
            vec![
                "(if (> x 1) (block (set y 2)) (set y 3))",
                "(while (< i 10) (set i (+ i 1)))",
                "(call print \"done\")",
                "(empty)",
                "(return)",
            ]
        );
    }

    #[test]
    fn test_dangling_else_binds_to_nearest_if() {
        let stmts = parse_body("if (a) if (b) x = 1; else x = 2;");
        assert_eq!(stmts[0].to_string(), "(if a (if b (set x 1) (set x 2)))");
    }

    #[test]
    fn test_conditional_without_else() {
        match &parse_body("if (ok) return 1;")[0] {
            Node::Conditional(cond) => assert!(cond.fail.is_none()),
            other => panic!("expected conditional, got {}", other),
        }
    }

    #[test]
    fn test_expression_statement_requires_semicolon() {
        assert_eq!(parse_body("x + 1;")[0].to_string(), "(+ x 1)");
        let err = syntax_error("void main() { x + 1 }");
        assert!(err.message.contains("Expected ';' after expression"), "{}", err.message);
        assert!(err.message.contains("found '}'"), "{}", err.message);
    }

    #[test]
    fn test_string_semicolon_is_not_a_terminator() {
        let err = syntax_error("void main() { return 1 \";\" }");
        assert!(err.message.contains("Expected ';' after return"), "{}", err.message);
    }

    #[test]
    fn test_nested_blocks() {
        let stmts = parse_body("{ { int32 x = 1; } }");
        assert_eq!(stmts[0].to_string(), "(block (block (decl int32 x 1)))");
    }

    #[test]
    fn test_top_level_statement_fails() {
        let err = syntax_error("x = 5;");
        assert!(err.message.starts_with("Unexpected global statement"), "{}", err.message);
        assert_eq!(err.span, Span::new(0, 1));

        syntax_error("int32 x = 5;");
        syntax_error("void main() {} ;");
    }

    #[test]
    fn test_keyword_return_type_fails() {
        syntax_error("while main() {}");
    }

    #[test]
    fn test_unbalanced_braces_fail() {
        let err = syntax_error("void f() { if (true) { return; }");
        assert!(err.message.contains("Expected '}' to close block"), "{}", err.message);
        assert!(err.message.contains("end of input"), "{}", err.message);
    }

    #[test]
    fn test_missing_paren_fails_at_end() {
        let source = "void f() { return g(1";
        let err = syntax_error(source);
        assert!(err.message.contains("found end of input"), "{}", err.message);
        assert_eq!(err.span, Span::new(source.len(), source.len()));
    }

    #[test]
    fn test_parameter_errors() {
        let err = syntax_error("void f(int32 a,) {}");
        assert!(err.message.contains("Expected parameter type"), "{}", err.message);

        let err = syntax_error("void f(int32) {}");
        assert!(err.message.contains("Expected parameter name"), "{}", err.message);
    }

    #[test]
    fn test_missing_body_fails() {
        let err = syntax_error("void f()");
        assert!(err.message.contains("Unexpected end of input"), "{}", err.message);
    }

    /// Nest `depth` copies of `open`/`close` around `inner`.
    fn nest(open: &str, inner: &str, close: &str, depth: usize) -> String {
        format!("{}{}{}", open.repeat(depth), inner, close.repeat(depth))
    }

    /// Run `source` through the parser on a thread with room for the deepest accepted input.
    fn parse_on_big_stack(source: String) -> Result<Program, CompileError> {
        std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(move || parse_str(&source))
            .expect("failed to spawn parser thread")
            .join()
            .expect("parser thread panicked")
    }

    #[test]
    fn test_realistic_nesting_parses() {
        let ifs = nest("if (a) { ", "x = 1;", " }", 50);
        assert!(parse_str(&format!("void f() {{ {} }}", ifs)).is_ok());

        let parens = nest("(", "1", ")", 100);
        assert!(parse_str(&format!("void f() {{ return {}; }}", parens)).is_ok());

        let whiles = nest("while (a) ", "x += 1;", "", 100);
        assert!(parse_str(&format!("void f() {{ {} }}", whiles)).is_ok());
    }

    #[test]
    fn test_statement_and_expression_depths_are_separate() {
        // Deep expressions inside deep blocks draw on separate budgets.
        let expr = nest("(", "-x", ")", MAX_EXPRESSION_NESTING - 2);
        let body = nest("{ ", &format!("return {};", expr), " }", MAX_STATEMENT_NESTING - 2);
        let source = format!("void f() {{ {} }}", body);
        assert!(parse_on_big_stack(source).is_ok());
    }

    #[test]
    fn test_nesting_limits() {
        let parens = nest("(", "1", ")", MAX_EXPRESSION_NESTING + 1);
        let err = parse_on_big_stack(format!("void f() {{ return {}; }}", parens)).unwrap_err();
        assert!(err.message.starts_with("Expression nesting too deep"), "{}", err.message);

        let negations = "-".repeat(MAX_EXPRESSION_NESTING + 1);
        let err = parse_on_big_stack(format!("void f() {{ return {}x; }}", negations)).unwrap_err();
        assert!(err.message.starts_with("Expression nesting too deep"), "{}", err.message);

        let blocks = nest("{", "", "}", MAX_STATEMENT_NESTING + 1);
        let err = parse_on_big_stack(format!("void f() {}", blocks)).unwrap_err();
        assert!(err.message.starts_with("Statement nesting too deep"), "{}", err.message);
    }

    #[test]
    fn test_level_tables_match_registry_precedence() {
        use brace_core::lang::operators::Precedence;

        let levels = [
            (EQUALITY_OPS, Precedence::Equality),
            (COMPARISON_OPS, Precedence::Comparison),
            (TERM_OPS, Precedence::Term),
            (FACTOR_OPS, Precedence::Factor),
            (REMAINDER_OPS, Precedence::Remainder),
        ];
        for (table, level) in levels {
            for (id, op) in table {
                assert_eq!(operators::precedence(*id), Some(level), "{:?}", id);
                assert_eq!(BinaryOp::from_operator(*id), Some(*op));
            }
        }

        let infix = operators::OPERATORS.iter().filter(|o| o.precedence.is_some()).count();
        let tabled: usize = levels.iter().map(|(table, _)| table.len()).sum();
        assert_eq!(infix, tabled, "every infix operator belongs to exactly one level");
    }

    #[test]
    fn test_lexical_errors_pass_through() {
        let err = parse_str("void main() { return 1 @ 2; }").unwrap_err();
        assert!(err.is_lexical());
    }
}
