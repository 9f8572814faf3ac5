use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A variable reference: `$name`. The name excludes the `$`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Variable<'src> {
    pub name: Cow<'src, str>,
}
