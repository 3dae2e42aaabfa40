//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Let and return statements
//! - Prefix and infix expressions and their precedence
//! - If expressions, function literals and calls
//! - Error accumulation and recovery

use test_log::test;

use crate::{
    ast::ast::{Expr, ExprType, Operator, Program, Stmt},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    lookups::BindingPower,
    parser::{parse, Parser},
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source, Some("test.mk".to_string()));
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.is_empty(), "parser had errors for {:?}: {:?}", source, messages);
    program
}

fn single_expr(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "expected one statement, got {}", program);
    match &program.statements[0] {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_program() {
    for source in ["", " ", "\n\t\r\n   "] {
        let (program, errors) = parse(source, None);

        assert!(program.is_empty());
        assert!(errors.is_empty());
    }
}

#[test]
fn test_parse_let_statement() {
    let program = parse_ok("let x = 5;");

    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Stmt::Let(stmt) => {
            assert_eq!(stmt.name.value, "x");
            match &stmt.value {
                Expr::Integer(int) => assert_eq!(int.value, 5),
                other => panic!("expected an integer, got {:?}", other),
            }
        }
        other => panic!("expected a let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y");

    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];
    assert_eq!(program.len(), expected.len());

    for (stmt, (name, value)) in program.statements.iter().zip(expected) {
        match stmt {
            Stmt::Let(stmt) => {
                assert_eq!(stmt.name.value, name);
                assert_eq!(stmt.value.to_string(), value);
            }
            other => panic!("expected a let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_let_missing_assign() {
    let (program, errors) = parse("let x 5;", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Integer,
        }
    );
    assert!(program
        .statements
        .iter()
        .all(|stmt| !matches!(stmt, Stmt::Let(_))));
}

#[test]
fn test_parse_let_missing_identifier() {
    let (_, errors) = parse("let = 10;", None);

    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assign,
        }
    );
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok("return 5; return 10 + x; return add(1);");

    let expected = ["5", "(10 + x)", "add(1)"];
    assert_eq!(program.len(), expected.len());

    for (stmt, value) in program.statements.iter().zip(expected) {
        match stmt {
            Stmt::Return(stmt) => {
                assert_eq!(stmt.value.as_ref().map(|v| v.to_string()).as_deref(), Some(value))
            }
            other => panic!("expected a return statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_bare_return() {
    let program = parse_ok("return; fn() { return }");

    assert_eq!(program.len(), 2);
    match &program.statements[0] {
        Stmt::Return(stmt) => assert!(stmt.value.is_none()),
        other => panic!("expected a return statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "return; fn() { return; }");
}

#[test]
fn test_parse_literal_expressions() {
    let program = parse_ok("foobar; 5; true; false;");

    let kinds: Vec<ExprType> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(stmt) => stmt.expression.get_expr_type(),
            other => panic!("expected an expression statement, got {:?}", other),
        })
        .collect();

    assert_eq!(
        kinds,
        vec![ExprType::Identifier, ExprType::Integer, ExprType::Boolean, ExprType::Boolean]
    );
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!5;", Operator::Bang, "5"),
        ("-15;", Operator::Minus, "15"),
        ("!true;", Operator::Bang, "true"),
        ("!false;", Operator::Bang, "false"),
    ];

    for (source, operator, right) in cases {
        let program = parse_ok(source);
        match single_expr(&program) {
            Expr::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.right.to_string(), right);
            }
            other => panic!("expected a prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", Operator::Plus),
        ("5 - 5;", Operator::Minus),
        ("5 * 5;", Operator::Asterisk),
        ("5 / 5;", Operator::Slash),
        ("5 > 5;", Operator::GreaterThan),
        ("5 < 5;", Operator::LessThan),
        ("5 == 5;", Operator::Equal),
        ("5 != 5;", Operator::NotEqual),
        ("true == false", Operator::Equal),
    ];

    for (source, operator) in cases {
        let program = parse_ok(source);
        match single_expr(&program) {
            Expr::Infix(infix) => assert_eq!(infix.operator, operator),
            other => panic!("expected an infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("-1 * 2 + 3", "((-1 * 2) + 3)"),
        ("1 < 2 == true", "((1 < 2) == true)"),
        ("-a * b", "(-a * b)"),
        ("!-a", "!-a"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4); (-5 * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "-(5 + 5)"),
        ("!(true == true)", "!(true == true)"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_ok("if (x < y) { x }");

    match single_expr(&program) {
        Expr::If(expr) => {
            assert_eq!(expr.condition.to_string(), "(x < y)");
            assert_eq!(expr.consequence.statements.len(), 1);
            assert_eq!(expr.consequence.to_string(), "{ x }");
            assert!(expr.alternative.is_none());
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y; z }");

    match single_expr(&program) {
        Expr::If(expr) => {
            let alternative = expr.alternative.as_ref().map(|alt| alt.to_string());
            assert_eq!(alternative.as_deref(), Some("{ y; z }"));
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_function_literal() {
    let program = parse_ok("fn(x, y) { x + y; }");

    match single_expr(&program) {
        Expr::Function(function) => {
            let names: Vec<&str> = function.parameters.iter().map(|p| p.value.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
            assert_eq!(function.body.statements.len(), 1);
            assert_eq!(function.body.to_string(), "{ (x + y) }");
        }
        other => panic!("expected a function literal, got {:?}", other),
    }
}

#[test]
fn test_parse_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);
        match single_expr(&program) {
            Expr::Function(function) => {
                let names: Vec<&str> =
                    function.parameters.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(names, expected);
            }
            other => panic!("expected a function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5)");

    match single_expr(&program) {
        Expr::Call(call) => {
            assert_eq!(call.function.to_string(), "add");
            let arguments: Vec<String> = call.arguments.iter().map(|a| a.to_string()).collect();
            assert_eq!(arguments, vec!["1", "(2 * 3)", "(4 + 5)"]);
        }
        other => panic!("expected a call expression, got {:?}", other),
    }
}

#[test]
fn test_parse_call_without_arguments() {
    let program = parse_ok("tick();");

    match single_expr(&program) {
        Expr::Call(call) => assert!(call.arguments.is_empty()),
        other => panic!("expected a call expression, got {:?}", other),
    }
}

#[test]
fn test_parse_immediate_call_of_function_literal() {
    let program = parse_ok("fn(x) { x }(5)");

    match single_expr(&program) {
        Expr::Call(call) => assert_eq!(call.function.get_expr_type(), ExprType::Function),
        other => panic!("expected a call expression, got {:?}", other),
    }
}

#[test]
fn test_missing_prefix_handler() {
    let (program, errors) = parse("let x = ;", None);

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Semicolon
        }
    );
    assert_eq!(errors[0].to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_illegal_character_is_reported() {
    let (_, errors) = parse("let x = @;", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::IllegalCharacter {
            token: "@".to_string()
        }
    );
    assert_eq!(errors[0].get_position().0, 8);
}

#[test]
fn test_integer_out_of_range() {
    let (_, errors) = parse("99999999999999999999", None);

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_largest_integer_parses() {
    let program = parse_ok("9223372036854775807");

    match single_expr(&program) {
        Expr::Integer(int) => assert_eq!(int.value, i64::MAX),
        other => panic!("expected an integer, got {:?}", other),
    }
}

#[test]
fn test_recovers_after_error() {
    let (program, errors) = parse("let x 5; let y = 10;", None);

    assert_eq!(errors.len(), 1);
    let last = program.statements.last().map(|stmt| stmt.to_string());
    assert_eq!(last.as_deref(), Some("let y = 10;"));
}

#[test]
fn test_errors_accumulate_in_order() {
    let (program, errors) = parse("let = 1; let y 2; let z = 3;", None);

    let names: Vec<&str> = errors.iter().map(|e| e.get_error_name()).collect();
    assert_eq!(
        names,
        vec!["UnexpectedToken", "MissingPrefixHandler", "UnexpectedToken"]
    );
    assert!(errors
        .windows(2)
        .all(|pair| pair[0].get_position().0 <= pair[1].get_position().0));
    assert_eq!(program.to_string(), "1; 2; let z = 3;");
}

#[test]
fn test_errors_inside_block_are_recovered() {
    let (program, errors) = parse("if (x) { let = 1; y }", None);

    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "if (x) { 1; y }");
}

#[test]
fn test_error_at_closing_brace_keeps_later_statements() {
    let (program, errors) = parse("let f = fn() { a + }; let y = 1;", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::RBrace,
        }
    );
    assert_eq!(program.to_string(), "let f = fn() { }; let y = 1;");
}

#[test]
fn test_error_at_closing_brace_of_if() {
    let (program, errors) = parse("if (x) { y + } z", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "if (x) { }; z");
}

#[test]
fn test_unterminated_block() {
    let (program, errors) = parse("if (x) { y", None);

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::RBrace,
            found: TokenKind::EOF,
        }
    );
}

#[test]
fn test_unclosed_grouping() {
    let (_, errors) = parse("(1 + 2", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "expected next token to be ), got EOF instead");
}

#[test]
fn test_bad_function_parameter() {
    let (_, errors) = parse("fn(x, 1) { x }", None);

    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Integer,
        }
    );
}

#[test]
fn test_parser_errors_accessor() {
    let mut parser = Parser::new(Lexer::new("let 5; x"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.to_string(), "5; x");
    assert!(parser.current_token().is(TokenKind::EOF));
}

#[test]
fn test_parser_primes_two_tokens() {
    let parser = Parser::new(Lexer::new("let x"));

    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);
}

#[test]
fn test_binding_power_ordering() {
    assert!(BindingPower::Lowest < BindingPower::Equals);
    assert!(BindingPower::Equals < BindingPower::LessGreater);
    assert!(BindingPower::LessGreater < BindingPower::Sum);
    assert!(BindingPower::Sum < BindingPower::Product);
    assert!(BindingPower::Product < BindingPower::Prefix);
    assert!(BindingPower::Prefix < BindingPower::Call);
}

#[test]
fn test_node_spans() {
    let program = parse_ok("let total = a + bc;");

    let span = program.statements[0].get_span();
    assert_eq!((span.start.0, span.end.0), (0, 19));
    match &program.statements[0] {
        Stmt::Let(stmt) => {
            let value = stmt.value.get_span();
            assert_eq!((value.start.0, value.end.0), (12, 18));
            assert_eq!(value.start.1.as_str(), "test.mk");
        }
        other => panic!("expected a let statement, got {:?}", other),
    }
}

#[test]
fn test_parser_is_send() {
    fn assert_send<T: Send>() {}

    assert_send::<Parser>();
    assert_send::<Program>();
}
