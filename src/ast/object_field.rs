use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A single `name: value` entry inside an object value.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ObjectField<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
}
