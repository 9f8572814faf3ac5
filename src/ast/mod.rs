//! AST types for parsed GraphQL executable documents.
//!
//! The tree mirrors the executable-document grammar: a [`Document`] owns an
//! ordered list of definitions, definitions own selections, selections own
//! arguments and values, and so on. Ownership is strictly tree-shaped —
//! parents own children by value, and the only cross-cutting relationship
//! (a [`FragmentSpread`] naming a [`FragmentDefinition`]) is a weak,
//! name-keyed reference that downstream consumers resolve themselves.
//!
//! All node types are parameterized over a `'src` lifetime and borrow their
//! strings from the source text via `Cow<'src, str>`. Nodes are immutable
//! after construction and structurally comparable with `==`, which is what
//! downstream print/parse round-trip tests rely on.

mod argument;
mod directive;
mod document;
mod executable_definition;
mod field;
mod fragment;
mod object_field;
mod operation;
mod selection;
mod type_annotation;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use directive::Directive;
pub use document::Document;
pub use executable_definition::ExecutableDefinition;
pub use field::Field;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use fragment::InlineFragment;
pub use fragment::TypeCondition;
pub use object_field::ObjectField;
pub use operation::Operation;
pub use operation::OperationDefinition;
pub use operation::OperationType;
pub use selection::Selection;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
