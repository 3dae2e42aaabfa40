//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser into a program, rendering it back to source, and
//! reporting errors against the original text.

use monkey_front::{
    ast::ast::{Expr, Program, Stmt},
    display_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
};
use test_log::test;

const PROGRAMS: &[&str] = &[
    "let x = 5;",
    "let five = 5; let ten = 10; let add = fn(x, y) { x + y; }; let result = add(five, ten);",
    "!-5; 5 < 10 > 5;",
    "if (5 < 10) { return true; } else { return false; }",
    "10 == 10; 10 != 9;",
    "let max = fn(a, b) { if (a > b) { a } else { b } }; max(1, -2 * 3);",
    "fn(x) { x * x }(5)",
    "(-f)(1); -f(1)",
    "let apply = fn(f, x) { return f(x); }; apply(fn(n) { n + 1 }, 41)",
    "return; a; -b; !c",
    "if (!(1 == 2)) { } else { let z = if (true) { 1 } else { 2 }; z }",
    "fn() { }()",
];

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse(source, None);
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(messages.is_empty(), "errors for {:?}: {:?}", source, messages);
    program
}

#[test]
fn test_round_trip() {
    for source in PROGRAMS {
        let program = parse_clean(source);
        let rendered = program.to_string();
        let reparsed = parse_clean(&rendered);

        assert_eq!(program, reparsed, "{:?} rendered as {:?}", source, rendered);
        // Rendering is a fixed point after one pass
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn test_relexing_produces_identical_tokens() {
    for source in PROGRAMS {
        let first = tokenize(*source, None);
        let second: Vec<_> = Lexer::new(*source).collect();

        assert_eq!(first.last().map(|t| t.kind), Some(TokenKind::EOF));
        assert_eq!(&first[..first.len() - 1], &second[..]);
    }
}

#[test]
fn test_parse_program_end_to_end() {
    let source = "
        let add = fn(a, b) {
            return a + b;
        };
        let result = add(1, 2 * 3);
        if (result > 5) { result } else { 0 }
    ";

    let program = parse_clean(source);
    assert_eq!(program.len(), 3);

    match &program.statements[0] {
        Stmt::Let(stmt) => {
            assert_eq!(stmt.name.value, "add");
            assert!(matches!(stmt.value, Expr::Function(_)));
        }
        other => panic!("expected a let statement, got {:?}", other),
    }
    assert_eq!(program.statements[1].to_string(), "let result = add(1, (2 * 3));");
    assert_eq!(
        program.statements[2].to_string(),
        "if ((result > 5)) { result } else { 0 }"
    );
}

#[test]
fn test_failed_parse_reports_every_error() {
    let source = "let x 5;\nlet = 3;\nlet ok = 1;\nlet y = #;";
    let mut parser = Parser::new(Lexer::with_file(source, Some("broken.mk".to_string())));
    let program = parser.parse_program();

    let names: Vec<&str> = parser.errors().iter().map(|e| e.get_error_name()).collect();
    assert_eq!(
        names,
        vec!["UnexpectedToken", "UnexpectedToken", "MissingPrefixHandler", "IllegalCharacter"]
    );
    assert!(program.statements.iter().any(|s| s.to_string() == "let ok = 1;"));

    let rendered = display_error(&parser.errors()[3], source);
    assert!(rendered.starts_with("Error: IllegalCharacter\n-> broken.mk\n"));
    assert!(rendered.ends_with("4 | let y = #;\n  | --------^"));
}

#[test]
fn test_independent_parsers_on_threads() {
    let handles: Vec<_> = PROGRAMS
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || {
                let (program, errors) = parse(source, None);
                (program.to_string(), errors.len())
            })
        })
        .collect();

    for (handle, source) in handles.into_iter().zip(PROGRAMS) {
        let (rendered, errors) = handle.join().expect("parser thread panicked");
        assert_eq!(errors, 0);
        assert_eq!(rendered, parse_clean(source).to_string());
    }
}
