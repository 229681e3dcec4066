//! Parser behavior through the public API: single productions via `Parser::new` and whole units via `parse`.

use strict_syntax::ast::{Expression, NodeKind, Statement, TypeName};
use strict_syntax::config::ParserConfig;
use strict_syntax::diagnostics::Stage;
use strict_syntax::lexer::{Scanner, Token, TokenKind};
use strict_syntax::line_map::LineMapBuilder;
use strict_syntax::parser::{self, Parser};
use strict_syntax::source::Region;
use strict_syntax::stream::VecTokenStream;

fn parser_for(source: &str) -> Parser<Scanner> {
    Parser::new(Scanner::from_source(source), ParserConfig::default())
}

fn type_name(source: &str) -> TypeName {
    parser_for(source).parse_type_name().expect("type name should parse")
}

#[test]
fn concrete_type_name() {
    match type_name("int") {
        TypeName::Concrete(t) => {
            assert_eq!(t.name, "int");
            assert_eq!(t.region, Region::new(0, 3));
        }
        other => panic!("Expected concrete type name, got {other:?}"),
    }
}

#[test]
fn generic_type_name() {
    match type_name("list<int>") {
        TypeName::Generic(t) => {
            assert_eq!(t.name, "list");
            assert!(matches!(&*t.argument, TypeName::Concrete(a) if a.name == "int"));
            assert_eq!(t.region, Region::new(0, 9));
        }
        other => panic!("Expected generic type name, got {other:?}"),
    }
}

#[test]
fn generic_of_list_type_name() {
    match type_name("list<int[]>") {
        TypeName::Generic(t) => {
            assert_eq!(t.name, "list");
            let TypeName::List(list) = &*t.argument else {
                panic!("Expected list type argument");
            };
            assert!(matches!(&*list.element, TypeName::Concrete(e) if e.name == "int"));
        }
        other => panic!("Expected generic type name, got {other:?}"),
    }
}

#[test]
fn field_selection_expression() {
    let expression = parser_for("strict.version")
        .parse_expression()
        .expect("expression should parse");
    let Expression::FieldSelect(select) = expression else {
        panic!("Expected field selection");
    };
    assert!(matches!(&*select.target, Expression::Identifier(i) if i.value == "strict"));
    assert!(matches!(&*select.selection, Expression::Identifier(i) if i.value == "version"));
    assert_eq!(select.region, Region::new(0, 14));
}

#[test]
fn parser_leaves_no_open_structures_after_a_production() {
    let mut parser = parser_for("a + b * c");
    parser.parse_expression().expect("expression should parse");
    assert!(parser.structures().is_empty());
    assert!(parser.current().is_end_of_statement());
}

#[test]
fn single_statement_through_parser() {
    let statement = parser_for("return total")
        .parse_statement()
        .expect("statement should parse");
    assert_eq!(statement.kind(), NodeKind::ReturnStatement);
}

#[test]
fn method_declaration_through_parser() {
    let method = parser_for("method area() returns number\n")
        .parse_method_declaration()
        .expect("method should parse");
    assert_eq!(method.name.value, "area");
    assert!(method.is_abstract);
}

#[test]
fn unclosed_parameter_list_reports_and_recovers() {
    let output = parser::parse("Call.strict", "method call(x int");
    let entries = output.diagnostics.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].stage, Stage::Syntactic);
    assert!(
        entries[0].message.ends_with("expected ) but got: 'end of statement'"),
        "{}",
        entries[0].message
    );
    assert!(matches!(output.unit.class.children.as_slice(), [Statement::Invalid(_)]));
}

#[test]
fn failed_production_returns_error_with_structure() {
    let error = parser_for("method call(x int")
        .parse_method_declaration()
        .expect_err("method should fail");
    assert_eq!(error.structure, NodeKind::MethodDeclaration);
    assert_eq!(error.region.begin, 0);
    assert!(!error.hints.is_empty());
}

#[test]
fn vector_stream_feeds_the_parser() {
    let ident = |name: &str, begin: usize| {
        Token::new(
            TokenKind::Identifier(name.to_string()),
            Region::new(begin, begin + name.len()),
            0,
        )
    };
    let has = Token::new(
        TokenKind::Keyword(strict_core::lang::keywords::KeywordId::Has),
        Region::new(0, 3),
        0,
    );
    let stream = VecTokenStream::new(vec![has, ident("count", 4), ident("int", 10)]);
    let output = parser::parse_with(stream, ParserConfig::new("Counter.strict"));
    assert!(!output.has_errors(), "{:?}", output.diagnostics.entries());
    assert!(matches!(&output.unit.class.children[0], Statement::Field(f) if f.name.value == "count"));
}

#[test]
fn vector_stream_diagnostics_resolve_through_its_line_map() {
    let has = |begin: usize| {
        Token::new(
            TokenKind::Keyword(strict_core::lang::keywords::KeywordId::Has),
            Region::new(begin, begin + 3),
            0,
        )
    };
    let tokens = vec![
        has(0),
        Token::new(TokenKind::Identifier("x".to_string()), Region::new(4, 5), 0),
        Token::new(TokenKind::Identifier("int".to_string()), Region::new(6, 9), 0),
        Token::end_of_statement(9, 0),
        has(10),
        Token::new(TokenKind::NumberLiteral("2".to_string()), Region::new(14, 15), 0),
    ];
    let mut lines = LineMapBuilder::new();
    lines.append("has x int", 0, 9);
    lines.append("has 2", 10, 5);
    let stream = VecTokenStream::new(tokens).with_line_map(lines.build());

    let output = parser::parse_with(stream, ParserConfig::new("Replay.strict"));
    assert_eq!(output.line_map.line_count(), 2);
    let resolved = output.resolve_diagnostics();
    assert_eq!(resolved.len(), 1);
    assert_eq!(
        resolved[0].to_string(),
        "Replay.strict:2:1: error: expected field name but got: '2'"
    );
}

#[test]
fn tree_root_does_not_carry_source_lines() {
    let output = parser::parse("Lines.strict", "has marker_field int\n");
    assert_eq!(output.line_map.line_count(), 1);
    let dump = format!("{:?}", output.unit);
    assert!(!dump.contains("has marker_field int"), "{dump}");
    assert!(dump.contains("marker_field"));
}

#[test]
fn every_declaration_failure_is_reported() {
    let source = "has\nmethod 1()\nhas ok int\ncreate(x)\nmethod fine()\n";
    let output = parser::parse("Broken.strict", source);
    let invalid = output.unit.class.children.iter().filter(|c| c.is_invalid()).count();
    assert_eq!(invalid, 3);
    assert_eq!(output.diagnostics.len(), 3);
    assert_eq!(output.unit.class.children.len(), 5);
    assert!(output.diagnostics.entries().iter().all(|e| e.unit_name == "Broken.strict"));
}

#[test]
fn diagnostics_resolve_to_lines() {
    let output = parser::parse("Lines.strict", "has x int\nhas 2 int\n");
    let resolved = output.resolve_diagnostics();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].line(), 2);
    assert_eq!(resolved[0].column(), 1);
    assert_eq!(
        resolved[0].to_string(),
        "Lines.strict:2:1: error: expected field name but got: '2'"
    );
}
