// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! End-to-end tests through the public API.

use es6dot_syntax::ast::*;
use es6dot_syntax::lexer::{KEYWORDS, TokenKind};
use es6dot_syntax::{Error, parse, tokenize};

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

#[test]
fn test_whitespace_only_yields_no_tokens() {
    for src in ["", " ", "\n\n", "\t \r\n  \x0c"] {
        assert!(tokenize(src).unwrap().is_empty(), "{src:?}");
    }
}

#[test]
fn test_reserved_words_never_lex_as_identifiers() {
    for (word, kind) in KEYWORDS {
        let tokens = tokenize(word).unwrap();
        assert_eq!(tokens.len(), 1, "{word}");
        assert_eq!(tokens[0].kind, *kind, "{word}");
        assert_ne!(tokens[0].kind, TokenKind::Identifier);
    }
}

#[test]
fn test_numeric_literals_decode_as_ieee754() {
    for src in ["0", "12", "3.5", "0.25", ".5", "00.125", "123456789"] {
        let tokens = tokenize(src).unwrap();
        assert_eq!(tokens.len(), 1, "{src}");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].as_number(), Some(src.parse::<f64>().unwrap()));
    }
}

#[test]
fn test_lines_advance_after_newline() {
    let tokens = tokenize("x = 5\ny = 10").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 1, 2, 2, 2]);
}

#[test]
fn test_parse_var_with_initializer() {
    let program = parse("var x = 5").unwrap();
    assert_eq!(
        program,
        vec![Statement::VarDeclaration(VarDeclaration {
            name: Identifier::new("x"),
            init: Some(Expression::Number(5.0)),
        })]
    );
}

#[test]
fn test_parse_var_without_initializer() {
    let program = parse("var x").unwrap();
    assert_eq!(
        program,
        vec![Statement::VarDeclaration(VarDeclaration {
            name: Identifier::new("x"),
            init: None,
        })]
    );
}

#[test]
fn test_parse_assignment() {
    let program = parse("x = 5").unwrap();
    assert_eq!(
        program,
        vec![Statement::Assignment(Assignment {
            name: Identifier::new("x"),
            value: Expression::Number(5.0),
        })]
    );
}

#[test]
fn test_parse_function_declaration() {
    let program = parse("function f(a, b) { return a }").unwrap();
    assert_eq!(
        program,
        vec![Statement::FunctionDeclaration(FunctionDeclaration {
            name: Identifier::new("f"),
            params: vec![Identifier::new("a"), Identifier::new("b")],
            body: vec![Statement::Return(ReturnStatement { value: ident("a") })],
        })]
    );
}

#[test]
fn test_leading_plus_uses_preceding_token() {
    let program = parse("x = 1\n+ y").unwrap();
    assert_eq!(program.len(), 2);

    let Statement::Expression(Expression::Binary(bin)) = &program[1] else {
        panic!("Expected a binary statement, got {:?}", program[1]);
    };
    assert_eq!(bin.operator, BinaryOperator::Add);
    // The preceding token was the number `1`; it comes back as an identifier.
    assert_eq!(*bin.left, ident("1"));
    assert_eq!(*bin.right, ident("y"));
}

#[test]
fn test_plus_left_operand_is_always_an_identifier() {
    let program = parse("x = a + 2").unwrap();
    assert_eq!(
        program,
        vec![Statement::Assignment(Assignment {
            name: Identifier::new("x"),
            value: Expression::add(ident("a"), Expression::Number(2.0)),
        })]
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(parse("").unwrap(), Vec::<Statement>::new());
}

#[test]
fn test_unmatched_character_reports_line() {
    let err = tokenize("x = 1\ny = #").unwrap_err();
    assert_eq!(err.line, 2);

    let err = parse("\n\n\n#").unwrap_err();
    assert!(matches!(err, Error::Lex(ref e) if e.line == 4));
}

#[test]
fn test_unsupported_statements_fail() {
    for src in ["if", "while (x) {}", "for", "class A {}", "import x"] {
        let err = parse(src).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{src}: {err}");
    }
}

#[test]
fn test_parse_error_carries_token_text() {
    let Error::Parse(err) = parse("function f(a) { if }").unwrap_err() else {
        panic!("Expected a parse error");
    };
    assert_eq!(err.token(), "if");
    assert_eq!(err.to_string(), "Unexpected token: if");
}

#[test]
fn test_program_display_round_trips() {
    let src = "var total = a + b\nfunction add(a, b) {\n    return a + b\n}";
    let program = parse(src).unwrap();
    let rendered: Vec<String> = program.iter().map(ToString::to_string).collect();
    assert_eq!(rendered.join("\n"), src);
    assert_eq!(parse(&rendered.join("\n")).unwrap(), program);
}

#[test]
fn test_ast_serializes_to_json() {
    let program = parse("var x = 5").unwrap();
    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "VarDeclaration": { "name": { "name": "x" }, "init": { "Number": 5.0 } } }
        ])
    );
}

#[cfg(feature = "async")]
mod loader {
    use es6dot_syntax::Error;
    use es6dot_syntax::loader::{parse_file, parse_files};
    use std::io::Write;

    fn source_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_parse_file() {
        let file = source_file("var a = 1\nfunction f() { return a }");
        let program = parse_file(file.path()).await.unwrap();
        assert_eq!(program.len(), 2);
    }

    #[tokio::test]
    async fn test_parse_missing_file() {
        let err = parse_file("/definitely/not/here.js").await.unwrap_err();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("here.js")));
    }

    #[tokio::test]
    async fn test_parse_files_keeps_order() {
        let good = source_file("x = 1");
        let bad = source_file("if");
        let results = parse_files(&[good.path(), bad.path()]).await;
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::Parse(_))));
    }
}
