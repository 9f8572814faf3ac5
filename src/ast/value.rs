use crate::ast::ObjectField;
use crate::ast::Variable;
use crate::token::StringValue;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A GraphQL input value. Recursive with unbounded nesting via the list and
/// object variants.
///
/// Numeric variants keep the raw literal text: GraphQL numbers may exceed
/// native precision, and the canonical textual form must round-trip
/// unchanged.
///
/// `true`, `false`, and `null` are contextual: the lexer produces plain
/// name tokens for them, and value parsing maps those three names to
/// [`Value::Boolean`] / [`Value::Null`] while any other name becomes an
/// [`Value::Enum`] symbol.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(Cow<'src, str>),
    Float(Cow<'src, str>),
    String(StringValue<'src>),
    Boolean(bool),
    Null,
    Enum(Cow<'src, str>),
    /// Ordered list of values; may be empty.
    List(Vec<Value<'src>>),
    /// Ordered list of `name: value` fields; may be empty. Duplicate field
    /// names are preserved, not deduplicated.
    Object(Vec<ObjectField<'src>>),
}
