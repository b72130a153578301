//! A JSON grammar written against the public API
//!
//! Exercises forward references for recursion, whitespace skipping through
//! `terminals`, and named captures for object members.

use parsewise::prelude::*;
use parsewise::{GrammarError, ParseError};

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(i64),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

fn string_literal() -> Result<impl Parser<Output = String> + Clone, GrammarError> {
    // One terminal for the whole literal, so whitespace inside it is kept
    Ok(pattern(r#""(?:[^"\\]|\\.)*""#)?.map(|quoted| quoted[1..quoted.len() - 1].to_string()))
}

fn array(value: Forward<Json>) -> impl Parser<Output = Json> {
    wrap("[", expect("]", "`]`"), comma_list(value)).map(Json::Array)
}

fn object(value: Forward<Json>) -> Result<impl Parser<Output = Json>, GrammarError> {
    let member = map_seq([
        capture("key", string_literal()?.map(Json::String)),
        ignore(expect(":", "`:`")),
        capture("value", value),
    ])
    .try_map(|mut fields| match (fields.remove("key"), fields.remove("value")) {
        (Some(Json::String(key)), Some(value)) => Some((key, value)),
        _ => None,
    });

    Ok(wrap("{", expect("}", "`}`"), comma_list(member)).map(Json::Object))
}

fn json() -> Result<impl Parser<Output = Json>, GrammarError> {
    let value: Forward<Json> = forward("value");

    let number = pattern("-?[0-9]+")?.try_map(|digits| digits.parse().ok().map(Json::Number));
    let boolean = or![literal("true").to(true), literal("false").to(false)].map(Json::Bool);

    value.define(or![
        literal("null").to(Json::Null),
        boolean,
        number,
        string_literal()?.map(Json::String),
        array(value.clone()),
        object(value.clone())?,
    ])?;

    Ok(terminals(skip(whitespace())).apply(expect(value, "value")))
}

fn obj(members: &[(&str, Json)]) -> Json {
    Json::Object(
        members
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect(),
    )
}

#[test]
fn test_scalars() {
    let parser = json().unwrap();
    assert_eq!(parser.parse_str("null").unwrap(), Json::Null);
    assert_eq!(parser.parse_str(" true ").unwrap(), Json::Bool(true));
    assert_eq!(parser.parse_str("-17").unwrap(), Json::Number(-17));
    assert_eq!(
        parser.parse_str(r#""a b\"c""#).unwrap(),
        Json::String(r#"a b\"c"#.to_string())
    );
}

#[test]
fn test_nested_document() {
    let parser = json().unwrap();
    let source = r#"
        {
            "name": "parsewise",
            "tags": ["parser", "combinator"],
            "stable": false,
            "deps": { "regex": 1, "serde": null },
            "empty": []
        }
    "#;

    let expected = obj(&[
        ("name", Json::String("parsewise".to_string())),
        (
            "tags",
            Json::Array(vec![
                Json::String("parser".to_string()),
                Json::String("combinator".to_string()),
            ]),
        ),
        ("stable", Json::Bool(false)),
        (
            "deps",
            obj(&[("regex", Json::Number(1)), ("serde", Json::Null)]),
        ),
        ("empty", Json::Array(vec![])),
    ]);

    assert_eq!(parser.parse_str(source).unwrap(), expected);
}

#[test]
fn test_whitespace_inside_strings_is_kept() {
    let parser = json().unwrap();
    assert_eq!(
        parser.parse_str(r#"[ "  spaced  " ]"#).unwrap(),
        Json::Array(vec![Json::String("  spaced  ".to_string())])
    );
}

#[test]
fn test_top_level_diagnostic() {
    let parser = json().unwrap();
    let result = parser.run("@");
    assert!(!result.is_ok());
    assert_eq!(result.rest(), "@");
    insta::assert_snapshot!(result.message().unwrap_or_default(), @r#"[1:1]: Expected value, got "@""#);
}

#[test]
fn test_unclosed_array_diagnostic() {
    let value: Forward<Json> = forward("value");
    value.define(json().unwrap()).unwrap();

    let parser = terminals(skip(whitespace())).apply(array(value));
    let result = parser.run("[1, 2 x]");
    assert!(!result.is_ok());
    insta::assert_snapshot!(result.message().unwrap_or_default(), @r#"[1:7]: Expected `]`, got "x]""#);
}

#[test]
fn test_multiline_error_report() {
    let parser = json().unwrap();
    let error = parser.parse_str("[\n  1,\n  2\n] ]").unwrap_err();

    assert!(matches!(error, ParseError::TrailingInput(_)));
    assert_eq!(error.location(), Location::new(4, 3));
}

#[test]
fn test_result_serializes_like_a_plain_record() {
    let parser = terminals(skip(whitespace())).apply(comma_list(integer()));
    let json = serde_json::to_value(parser.run(" 1 , 2 ;")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "success": true, "value": [1, 2], "rest": ";" })
    );
}
