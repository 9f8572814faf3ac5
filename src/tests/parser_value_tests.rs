//! Tests for value parsing.
//!
//! Each test routes a literal through an argument position and pattern
//! matches the resulting `Value` variant.

use crate::ast::ObjectField;
use crate::ast::Value;
use crate::ast::Variable;
use crate::tests::utils::parse_argument_value;
use crate::token::StringValue;

// =============================================================================
// Numeric values
// =============================================================================

/// Verifies that int literals keep their raw text, sign included.
#[test]
fn int_values() {
    assert_eq!(parse_argument_value("123"), Value::Int("123".into()));
    assert_eq!(parse_argument_value("-456"), Value::Int("-456".into()));
    assert_eq!(parse_argument_value("0"), Value::Int("0".into()));
}

/// Verifies that float literals keep their raw text: no normalization of
/// exponent case, signs, or trailing zeros.
#[test]
fn float_values() {
    assert_eq!(parse_argument_value("1.5"), Value::Float("1.5".into()));
    assert_eq!(
        parse_argument_value("-1.23e-4"),
        Value::Float("-1.23e-4".into())
    );
    assert_eq!(parse_argument_value("4.2E10"), Value::Float("4.2E10".into()));
}

/// Verifies that an int too large for any native integer type still
/// parses; only the text is kept.
#[test]
fn int_beyond_native_precision() {
    assert_eq!(
        parse_argument_value("123456789012345678901234567890"),
        Value::Int("123456789012345678901234567890".into())
    );
}

// =============================================================================
// Strings, booleans, null, enums
// =============================================================================

/// Verifies single-quoted string values.
#[test]
fn string_value() {
    assert_eq!(
        parse_argument_value(r#""hello""#),
        Value::String(StringValue::SingleQuoted("hello".into()))
    );
}

/// Verifies that block strings survive into value position with their raw
/// content.
#[test]
fn block_string_value() {
    assert_eq!(
        parse_argument_value("\"\"\"line one\nline two\"\"\""),
        Value::String(StringValue::BlockQuoted("line one\nline two".into()))
    );
}

/// Verifies the three contextual name values.
#[test]
fn boolean_and_null_values() {
    assert_eq!(parse_argument_value("true"), Value::Boolean(true));
    assert_eq!(parse_argument_value("false"), Value::Boolean(false));
    assert_eq!(parse_argument_value("null"), Value::Null);
}

/// Verifies that any other name in value position is an enum symbol,
/// including names that merely resemble the contextual ones.
#[test]
fn enum_values() {
    assert_eq!(parse_argument_value("NAME"), Value::Enum("NAME".into()));
    assert_eq!(parse_argument_value("True"), Value::Enum("True".into()));
    assert_eq!(parse_argument_value("nullx"), Value::Enum("nullx".into()));
}

// =============================================================================
// Variables
// =============================================================================

/// Verifies variable references in value position.
#[test]
fn variable_value() {
    assert_eq!(
        parse_argument_value("$userId"),
        Value::Variable(Variable {
            name: "userId".into(),
        })
    );
}

// =============================================================================
// Lists
// =============================================================================

/// Verifies that a list value may be empty (unlike selection sets and
/// argument lists).
#[test]
fn empty_list_value() {
    assert_eq!(parse_argument_value("[]"), Value::List(Vec::new()));
}

/// Verifies heterogeneous and nested list values.
#[test]
fn nested_list_value() {
    assert_eq!(
        parse_argument_value("[1, [true, null], $v]"),
        Value::List(vec![
            Value::Int("1".into()),
            Value::List(vec![Value::Boolean(true), Value::Null]),
            Value::Variable(Variable { name: "v".into() }),
        ])
    );
}

// =============================================================================
// Objects
// =============================================================================

/// Verifies that an object value may be empty.
#[test]
fn empty_object_value() {
    assert_eq!(parse_argument_value("{}"), Value::Object(Vec::new()));
}

/// Verifies object fields in source order, with nesting.
#[test]
fn object_value() {
    assert_eq!(
        parse_argument_value(r#"{ lat: 1.5, inner: { deep: "x" } }"#),
        Value::Object(vec![
            ObjectField {
                name: "lat".into(),
                value: Value::Float("1.5".into()),
            },
            ObjectField {
                name: "inner".into(),
                value: Value::Object(vec![ObjectField {
                    name: "deep".into(),
                    value: Value::String(StringValue::SingleQuoted("x".into())),
                }]),
            },
        ])
    );
}

/// Verifies that duplicate object field names are preserved in order, not
/// deduplicated.
#[test]
fn duplicate_object_fields_are_preserved() {
    assert_eq!(
        parse_argument_value("{ a: 1, a: 2 }"),
        Value::Object(vec![
            ObjectField {
                name: "a".into(),
                value: Value::Int("1".into()),
            },
            ObjectField {
                name: "a".into(),
                value: Value::Int("2".into()),
            },
        ])
    );
}
