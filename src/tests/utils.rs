//! Shared helpers for navigating parsed documents in tests.

use crate::ParseError;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::Operation;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::parse;
use crate::token::TokenKind;
use crate::tokenize;

/// Parses `source`, panicking with the error if it does not parse.
pub fn parse_document(source: &str) -> Document<'_> {
    parse(source).unwrap_or_else(|error| panic!("expected {source:?} to parse, got: {error}"))
}

/// Parses `source`, panicking if it *does* parse, and returns the error.
pub fn parse_failure(source: &str) -> ParseError<'_> {
    match parse(source) {
        Ok(document) => panic!("expected {source:?} to fail, got: {document:?}"),
        Err(error) => error,
    }
}

/// Lexes `source` and strips the spans, leaving just the kinds.
pub fn token_kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source)
        .unwrap_or_else(|error| panic!("expected {source:?} to lex, got: {error}"))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

/// Extracts the selections of a single shorthand (`{ ... }`) operation.
pub fn shorthand_selections<'a, 'src>(document: &'a Document<'src>) -> &'a [Selection<'src>] {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        ExecutableDefinition::Operation(OperationDefinition::SelectionSet(selections)) => {
            selections
        }
        other => panic!("expected a shorthand operation, got: {other:?}"),
    }
}

/// Extracts a single full-form operation from a document.
pub fn single_operation<'a, 'src>(document: &'a Document<'src>) -> &'a Operation<'src> {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        ExecutableDefinition::Operation(OperationDefinition::Operation(operation)) => operation,
        other => panic!("expected a full-form operation, got: {other:?}"),
    }
}

/// Extracts the first selection as a field, panicking on any other shape.
pub fn first_field<'a, 'src>(selections: &'a [Selection<'src>]) -> &'a Field<'src> {
    match selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("expected a field selection, got: {other:?}"),
    }
}

/// Parses `{ field(arg: <literal>) }` and returns the argument's value.
pub fn parse_argument_value(literal: &str) -> Value<'static> {
    let source = format!("{{ field(arg: {literal}) }}");
    let document = parse_document(&source);
    let field = first_field(shorthand_selections(&document));
    assert_eq!(field.arguments.len(), 1);
    let value = field.arguments[0].value.clone();
    owned_value(value)
}

/// Detaches a value from its borrowed source text so test helpers can
/// return it past the source's lifetime.
fn owned_value(value: Value<'_>) -> Value<'static> {
    use crate::ast::ObjectField;
    use crate::ast::Variable;
    use crate::token::StringValue;
    use std::borrow::Cow;

    fn own(text: Cow<'_, str>) -> Cow<'static, str> {
        Cow::Owned(text.into_owned())
    }

    match value {
        Value::Variable(variable) => Value::Variable(Variable {
            name: own(variable.name),
        }),
        Value::Int(text) => Value::Int(own(text)),
        Value::Float(text) => Value::Float(own(text)),
        Value::String(StringValue::SingleQuoted(content)) => {
            Value::String(StringValue::SingleQuoted(own(content)))
        }
        Value::String(StringValue::BlockQuoted(content)) => {
            Value::String(StringValue::BlockQuoted(own(content)))
        }
        Value::Boolean(boolean) => Value::Boolean(boolean),
        Value::Null => Value::Null,
        Value::Enum(symbol) => Value::Enum(own(symbol)),
        Value::List(values) => Value::List(values.into_iter().map(owned_value).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|field| ObjectField {
                    name: own(field.name),
                    value: owned_value(field.value),
                })
                .collect(),
        ),
    }
}
