//! Unit tests for marker-extraction, ANSI-stripping, JSON-decoding, and
//! the numeric precheck. No real parser subprocess is available in
//! this repository's test environment, so these exercise the decoding
//! logic directly against canned stdout fixtures (§4.6, SPEC_FULL §8).

use crate::client::{bare_numeric_for_tests, decode_for_tests};
use axlang_core::ast::Ast;
use axlang_core::error::AxError;

#[test]
fn bare_positive_integer_is_precheck_handled() {
    assert_eq!(bare_numeric_for_tests("42"), Some(Ast::Integer(42)));
}

#[test]
fn bare_negative_integer_is_precheck_handled() {
    assert_eq!(bare_numeric_for_tests("-42"), Some(Ast::Integer(-42)));
}

#[test]
fn bare_negative_float_is_precheck_handled() {
    assert_eq!(bare_numeric_for_tests("-3.5"), Some(Ast::Float(-3.5)));
}

#[test]
fn non_numeric_input_is_not_precheck_handled() {
    assert_eq!(bare_numeric_for_tests("(+ 1 2)"), None);
    assert_eq!(bare_numeric_for_tests("foo"), None);
}

#[test]
fn decodes_json_array_after_marker() {
    let stdout = "some framing noise\nParsed value: [\"+\", 1, 2]\n";
    let ast = decode_for_tests(stdout).unwrap();
    assert_eq!(
        ast,
        Ast::List(vec![Ast::Symbol("+".to_string()), Ast::Integer(1), Ast::Integer(2)])
    );
}

#[test]
fn strips_ansi_color_codes_before_decoding() {
    let stdout = "Parsed value: \x1b[32m[\"x\", 1]\x1b[0m\n";
    let ast = decode_for_tests(stdout).unwrap();
    assert_eq!(
        ast,
        Ast::List(vec![Ast::Symbol("x".to_string()), Ast::Integer(1)])
    );
}

#[test]
fn quoted_json_string_keeps_its_embedded_quotes() {
    let stdout = r#"Parsed value: "\"hello\""#.to_string() + "\n";
    let ast = decode_for_tests(&stdout).unwrap();
    assert_eq!(ast, Ast::StringLiteral("\"hello\"".to_string()));
}

#[test]
fn bare_identifier_string_becomes_a_symbol() {
    let stdout = "Parsed value: \"foo\"\n";
    let ast = decode_for_tests(stdout).unwrap();
    assert_eq!(ast, Ast::Symbol("foo".to_string()));
}

#[test]
fn unparseable_json_falls_back_to_bare_symbol() {
    let stdout = "Parsed value: not valid json at all\n";
    let ast = decode_for_tests(stdout).unwrap();
    assert_eq!(ast, Ast::Symbol("not valid json at all".to_string()));
}

#[test]
fn missing_marker_is_a_parser_error() {
    let stdout = "no marker anywhere in this output\n";
    assert!(matches!(decode_for_tests(stdout), Err(AxError::Parser(_))));
}

#[test]
fn float_literal_in_json_decodes_as_float() {
    let stdout = "Parsed value: 3.5\n";
    let ast = decode_for_tests(stdout).unwrap();
    assert_eq!(ast, Ast::Float(3.5));
}
