use crate::token::TokenKind;

/// Categorizes parse errors for programmatic handling.
///
/// Every "missing"/"empty"/"unterminated" variant is anchored at the
/// *opening* token of the construct it describes (carried by
/// [`ParseError`](crate::ParseError) as a resolved line/column): an
/// unterminated argument list points at its `(`, not at the point the
/// parser gave up. This yields "unterminated X starting here" diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind<'src> {
    /// After the `fragment` keyword, the fragment name is absent or is the
    /// reserved word `on`.
    #[error("missing fragment name")]
    MissingFragmentName,

    /// A fragment definition lacks its mandatory `on Type` clause.
    #[error("missing type condition")]
    MissingTypeCondition,

    /// An operation, fragment definition, or inline fragment lacks its
    /// mandatory selection set.
    #[error("missing selection set")]
    MissingSelectionSet,

    /// A `{` opened a selection set that never closes with `}`.
    #[error("unterminated selection set")]
    UnterminatedSelectionSet,

    /// A selection set closed without containing a single selection.
    #[error("empty selection set")]
    EmptySelectionSet,

    /// An argument list closed without containing a single argument.
    #[error("empty argument list")]
    EmptyArgumentList,

    /// A `(` opened an argument list that never closes with `)`.
    #[error("unterminated argument list")]
    UnterminatedArgumentList,

    /// An argument's `name:` was not followed by a value.
    #[error("missing argument value")]
    MissingArgumentValue,

    /// A `[` opened a list value that never closes with `]`.
    #[error("unterminated list value")]
    UnterminatedListValue,

    /// A `{` opened an object value that never closes with `}`.
    #[error("unterminated object value")]
    UnterminatedObjectValue,

    /// An object field's `name:` was not followed by a value.
    #[error("missing object field value")]
    MissingObjectValue,

    /// A `@` was not followed by a directive name.
    #[error("missing directive name")]
    MissingDirectiveName,

    /// A variable-definition list closed without containing a single
    /// definition.
    #[error("empty variable definition list")]
    EmptyVariableDefinitionList,

    /// A `(` opened a variable-definition list that never closes with `)`.
    #[error("unterminated variable definition list")]
    UnterminatedVariableDefinitionList,

    /// A variable was not followed by `: Type`.
    #[error("missing variable type")]
    MissingVariableType,

    /// Input remained after the last parseable definition. Carries the
    /// offending token's kind.
    #[error("unexpected token: {}", found.description())]
    UnexpectedToken { found: TokenKind<'src> },

    /// The lexer found input matching no token rule.
    #[error("unrecognized input")]
    UnrecognizedInput,
}
