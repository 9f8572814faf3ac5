use serde::Deserialize;
use serde::Serialize;
use std::borrow::Cow;

/// A type reference in a variable definition: named, list, or non-null.
///
/// The recursive arms box their child because the nesting depth is
/// unbounded (`[[Int!]]!`, etc.). `NonNull` only ever wraps a named or list
/// type — the grammar consumes at most one trailing `!`, so
/// `NonNull(NonNull(_))` cannot be produced by parsing and no runtime check
/// is needed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeAnnotation<'src> {
    Named(Cow<'src, str>),
    List(Box<TypeAnnotation<'src>>),
    NonNull(Box<TypeAnnotation<'src>>),
}

impl<'src> TypeAnnotation<'src> {
    /// Returns the underlying named type, unwrapping any list/non-null
    /// layers.
    pub fn innermost_named_type(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List(inner) => inner.innermost_named_type(),
            TypeAnnotation::NonNull(inner) => inner.innermost_named_type(),
        }
    }
}
