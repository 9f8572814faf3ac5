use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A named argument: `name: value`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Argument<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
}
