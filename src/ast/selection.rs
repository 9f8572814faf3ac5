use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use serde::Deserialize;
use serde::Serialize;

/// A single selection within a selection set.
///
/// A selection set, once its opening `{` is matched, must contain at least
/// one selection; `{ }` is a syntax error, not an empty tree.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}
