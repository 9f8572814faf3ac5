use crate::ast::ExecutableDefinition;
use serde::Deserialize;
use serde::Serialize;

/// A parsed GraphQL executable document.
///
/// Holds the document's definitions in source order. Order is semantically
/// meaningful and is preserved, never sorted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Document<'src> {
    pub definitions: Vec<ExecutableDefinition<'src>>,
}
