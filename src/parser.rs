//! Recursive descent parser for GraphQL executable documents.
//!
//! One `read_*` function per grammar production, all operating on a
//! [`TokenCursor`]. Two failure modes are kept strictly apart:
//!
//! - **Soft failure** (`Ok(None)`): the construct never started. The rule
//!   restores the cursor to exactly where it found it so the caller can try
//!   the next alternative — this is the backtracking that makes ambiguous
//!   prefixes (bare selection set vs. named operation, fragment spread vs.
//!   inline fragment) parse with ordinary recursive functions.
//! - **Hard failure** (`Err`): the construct definitely started but is
//!   malformed. The error propagates immediately; no alternative is tried.
//!   Hard errors are anchored at the byte offset of the construct's
//!   *opening* token, so an unterminated argument list points at its `(`.
//!
//! Every rule consumes at least one token on success or leaves the cursor
//! untouched on soft failure, which is what guarantees the greedy
//! repetition loops (selections, arguments, directives, values) terminate
//! on all inputs.
//!
//! Byte offsets are resolved to line/column in exactly one place: the
//! top-level [`parse`].

use crate::ParseError;
use crate::ParseErrorKind;
use crate::SourcePosition;
use crate::TokenCursor;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::ExecutableDefinition;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::ObjectField;
use crate::ast::Operation;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::TypeCondition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::lexer::tokenize;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Parses `source` into an executable [`Document`].
///
/// On failure, returns the first [`ParseError`] encountered (lexical or
/// syntactic) with its offset already resolved to a 1-based line/column
/// position; no partial AST is returned.
///
/// # Example
///
/// ```
/// use graphql_exec_parser::ast::{ExecutableDefinition, OperationDefinition, Selection};
/// use graphql_exec_parser::parse;
///
/// let document = parse("{ id }").unwrap();
/// let ExecutableDefinition::Operation(OperationDefinition::SelectionSet(selections)) =
///     &document.definitions[0]
/// else {
///     panic!("expected shorthand operation");
/// };
/// let Selection::Field(field) = &selections[0] else {
///     panic!("expected field");
/// };
/// assert_eq!(field.name, "id");
/// ```
pub fn parse(source: &str) -> Result<Document<'_>, ParseError<'_>> {
    let tokens = tokenize(source)?;
    let mut cursor = TokenCursor::new(&tokens);

    let mut definitions = Vec::new();
    loop {
        match read_definition(&mut cursor) {
            Ok(Some(definition)) => definitions.push(definition),
            Ok(None) => break,
            Err(raw) => return Err(raw.resolve(source)),
        }
    }

    if let Some(token) = cursor.peek() {
        let raw = RawParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: token.kind.clone(),
            },
            token.span.start,
        );
        return Err(raw.resolve(source));
    }

    Ok(Document { definitions })
}

// =============================================================================
// Internal error plumbing
// =============================================================================

/// A parse error still carrying a raw byte offset.
///
/// Only [`parse`] converts these to public [`ParseError`]s; every rule
/// below deals in offsets.
struct RawParseError<'src> {
    kind: ParseErrorKind<'src>,
    offset: u32,
}

impl<'src> RawParseError<'src> {
    fn new(kind: ParseErrorKind<'src>, offset: u32) -> Self {
        Self { kind, offset }
    }

    /// Resolves the raw offset against `source` into a positioned
    /// [`ParseError`].
    fn resolve(self, source: &str) -> ParseError<'src> {
        ParseError::new(
            self.kind,
            SourcePosition::of_offset(source, self.offset as usize),
        )
    }
}

/// The result of a grammar rule: hard failure, soft failure, or a node.
type RuleResult<'src, T> = Result<T, RawParseError<'src>>;

// =============================================================================
// Token-level helpers
// =============================================================================

/// Consumes the current token if its kind equals `kind`, returning the
/// token's start offset.
fn eat<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>, kind: &TokenKind<'src>) -> Option<u32> {
    let token = cursor.peek()?;
    if token.kind == *kind {
        cursor.next();
        Some(token.span.start)
    } else {
        None
    }
}

/// Consumes the current token if it is a name whose text equals `keyword`,
/// returning the token's start offset.
///
/// Keywords (`fragment`, `on`, `query`, ...) are contextual: they are
/// ordinary name tokens and only act as keywords in the grammar positions
/// that call this helper.
fn eat_keyword<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>, keyword: &str) -> Option<u32> {
    let token = cursor.peek()?;
    if token.kind.as_name() == Some(keyword) {
        cursor.next();
        Some(token.span.start)
    } else {
        None
    }
}

/// Consumes the current token if it is a name, returning its text.
fn read_name<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<Cow<'src, str>> {
    match &cursor.peek()?.kind {
        TokenKind::Name(text) => {
            let text = text.clone();
            cursor.next();
            Some(text)
        }
        _ => None,
    }
}

/// Returns the start offset of the current token, if any.
fn peek_offset(cursor: &TokenCursor<'_, '_>) -> Option<u32> {
    cursor.peek().map(|token| token.span.start)
}

// =============================================================================
// Definitions
// =============================================================================

fn read_definition<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<ExecutableDefinition<'src>>> {
    if let Some(operation) = read_operation_definition(cursor)? {
        return Ok(Some(ExecutableDefinition::Operation(operation)));
    }
    if let Some(fragment) = read_fragment_definition(cursor)? {
        return Ok(Some(ExecutableDefinition::Fragment(fragment)));
    }
    Ok(None)
}

/// Reads an operation definition, preferring the bare-selection-set
/// shorthand; the named-operation form is only tried when a selection set
/// does not start immediately.
fn read_operation_definition<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<OperationDefinition<'src>>> {
    if let Some(selection_set) = read_selection_set(cursor)? {
        return Ok(Some(OperationDefinition::SelectionSet(selection_set)));
    }
    if let Some(operation) = read_operation(cursor)? {
        return Ok(Some(OperationDefinition::Operation(operation)));
    }
    Ok(None)
}

fn read_operation<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Operation<'src>>> {
    let Some((operation_type, keyword_offset)) = read_operation_type(cursor) else {
        return Ok(None);
    };

    let name = read_name(cursor);
    let variable_definitions = read_variable_definitions(cursor)?;
    let directives = read_directives(cursor)?;

    let Some(selection_set) = read_selection_set(cursor)? else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingSelectionSet,
            keyword_offset,
        ));
    };

    Ok(Some(Operation {
        operation_type,
        name,
        variable_definitions,
        directives,
        selection_set,
    }))
}

fn read_operation_type<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> Option<(OperationType, u32)> {
    let token = cursor.peek()?;
    let operation_type = match token.kind.as_name()? {
        "query" => OperationType::Query,
        "mutation" => OperationType::Mutation,
        "subscription" => OperationType::Subscription,
        _ => return None,
    };
    cursor.next();
    Some((operation_type, token.span.start))
}

fn read_fragment_definition<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<FragmentDefinition<'src>>> {
    let Some(keyword_offset) = eat_keyword(cursor, "fragment") else {
        return Ok(None);
    };

    // `on` is reserved in fragment-name position: `fragment on on T` would
    // otherwise be ambiguous with the type condition.
    let Some(fragment_name) = read_fragment_name(cursor) else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingFragmentName,
            keyword_offset,
        ));
    };

    let Some(type_condition) = read_type_condition(cursor) else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingTypeCondition,
            keyword_offset,
        ));
    };

    let directives = read_directives(cursor)?;

    let Some(selection_set) = read_selection_set(cursor)? else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingSelectionSet,
            keyword_offset,
        ));
    };

    Ok(Some(FragmentDefinition {
        fragment_name,
        type_condition,
        directives,
        selection_set,
    }))
}

fn read_fragment_name<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<Cow<'src, str>> {
    let start = *cursor;
    let name = read_name(cursor)?;
    if name == "on" {
        *cursor = start;
        return None;
    }
    Some(name)
}

fn read_type_condition<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> Option<TypeCondition<'src>> {
    let start = *cursor;
    eat_keyword(cursor, "on")?;
    let Some(named_type) = read_name(cursor) else {
        *cursor = start;
        return None;
    };
    Some(TypeCondition { named_type })
}

// =============================================================================
// Selections
// =============================================================================

/// Reads a `{ ... }` selection set.
///
/// Once the `{` is consumed the set must contain at least one selection and
/// must close with `}`; both failures are hard errors anchored at the `{`.
fn read_selection_set<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Vec<Selection<'src>>>> {
    let Some(open_offset) = eat(cursor, &TokenKind::CurlyBraceOpen) else {
        return Ok(None);
    };

    let mut selections = Vec::new();
    while let Some(selection) = read_selection(cursor)? {
        selections.push(selection);
    }

    if eat(cursor, &TokenKind::CurlyBraceClose).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::UnterminatedSelectionSet,
            open_offset,
        ));
    }
    if selections.is_empty() {
        return Err(RawParseError::new(
            ParseErrorKind::EmptySelectionSet,
            open_offset,
        ));
    }

    Ok(Some(selections))
}

/// Reads a single selection: a field, else a fragment spread, else an
/// inline fragment. The leading token disambiguates these, but each
/// alternative still rolls back cleanly on a partial match (e.g. `...` with
/// no fragment name falls through from spread to inline fragment).
fn read_selection<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Selection<'src>>> {
    if let Some(field) = read_field(cursor)? {
        return Ok(Some(Selection::Field(field)));
    }
    if let Some(spread) = read_fragment_spread(cursor)? {
        return Ok(Some(Selection::FragmentSpread(spread)));
    }
    if let Some(inline) = read_inline_fragment(cursor)? {
        return Ok(Some(Selection::InlineFragment(inline)));
    }
    Ok(None)
}

fn read_field<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> RuleResult<'src, Option<Field<'src>>> {
    let start = *cursor;
    let alias = read_alias(cursor);
    let Some(name) = read_name(cursor) else {
        // `name :` followed by a non-name (e.g. `x: 1`) matches the alias
        // rule but not the field rule; undo the alias consumption too.
        *cursor = start;
        return Ok(None);
    };

    let arguments = read_arguments(cursor)?;
    let directives = read_directives(cursor)?;
    let selection_set = read_selection_set(cursor)?;

    Ok(Some(Field {
        alias,
        name,
        arguments,
        directives,
        selection_set,
    }))
}

fn read_alias<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<Cow<'src, str>> {
    let start = *cursor;
    let Some(alias) = read_name(cursor) else {
        return None;
    };
    if eat(cursor, &TokenKind::Colon).is_none() {
        *cursor = start;
        return None;
    }
    Some(alias)
}

fn read_fragment_spread<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<FragmentSpread<'src>>> {
    let start = *cursor;
    if eat(cursor, &TokenKind::Ellipsis).is_none() {
        return Ok(None);
    }
    let Some(fragment_name) = read_fragment_name(cursor) else {
        // `... on T` or a bare `...`: not a spread. Roll back so the
        // inline-fragment alternative can start from the ellipsis.
        *cursor = start;
        return Ok(None);
    };
    let directives = read_directives(cursor)?;
    Ok(Some(FragmentSpread {
        fragment_name,
        directives,
    }))
}

fn read_inline_fragment<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<InlineFragment<'src>>> {
    let Some(ellipsis_offset) = eat(cursor, &TokenKind::Ellipsis) else {
        return Ok(None);
    };

    let type_condition = read_type_condition(cursor);
    let directives = read_directives(cursor)?;

    let Some(selection_set) = read_selection_set(cursor)? else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingSelectionSet,
            ellipsis_offset,
        ));
    };

    Ok(Some(InlineFragment {
        type_condition,
        directives,
        selection_set,
    }))
}

// =============================================================================
// Arguments and directives
// =============================================================================

/// Reads a parenthesized argument list, or nothing.
///
/// Once the `(` is consumed the list must contain at least one argument
/// (`()` is an empty-list error, not an absent list) and must close with
/// `)`; both failures anchor at the `(`.
fn read_arguments<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Vec<Argument<'src>>> {
    let Some(open_offset) = eat(cursor, &TokenKind::ParenOpen) else {
        return Ok(Vec::new());
    };

    let mut arguments = Vec::new();
    while let Some(argument) = read_argument(cursor)? {
        arguments.push(argument);
    }

    if eat(cursor, &TokenKind::ParenClose).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::UnterminatedArgumentList,
            open_offset,
        ));
    }
    if arguments.is_empty() {
        return Err(RawParseError::new(
            ParseErrorKind::EmptyArgumentList,
            open_offset,
        ));
    }

    Ok(arguments)
}

fn read_argument<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Argument<'src>>> {
    let start = *cursor;
    let Some(name_offset) = peek_offset(cursor) else {
        return Ok(None);
    };
    let Some(name) = read_name(cursor) else {
        return Ok(None);
    };
    if eat(cursor, &TokenKind::Colon).is_none() {
        *cursor = start;
        return Ok(None);
    }
    let Some(value) = read_value(cursor)? else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingArgumentValue,
            name_offset,
        ));
    };
    Ok(Some(Argument { name, value }))
}

fn read_directives<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Vec<Directive<'src>>> {
    let mut directives = Vec::new();
    while let Some(directive) = read_directive(cursor)? {
        directives.push(directive);
    }
    Ok(directives)
}

fn read_directive<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Directive<'src>>> {
    let Some(at_offset) = eat(cursor, &TokenKind::At) else {
        return Ok(None);
    };
    let Some(name) = read_name(cursor) else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingDirectiveName,
            at_offset,
        ));
    };
    let arguments = read_arguments(cursor)?;
    Ok(Some(Directive { name, arguments }))
}

// =============================================================================
// Values
// =============================================================================

fn read_value<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> RuleResult<'src, Option<Value<'src>>> {
    if let Some(variable) = read_variable(cursor) {
        return Ok(Some(Value::Variable(variable)));
    }
    if let Some(value) = read_simple_value(cursor) {
        return Ok(Some(value));
    }
    if let Some(values) = read_list_value(cursor)? {
        return Ok(Some(Value::List(values)));
    }
    if let Some(fields) = read_object_value(cursor)? {
        return Ok(Some(Value::Object(fields)));
    }
    Ok(None)
}

fn read_variable<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<Variable<'src>> {
    let start = *cursor;
    eat(cursor, &TokenKind::Dollar)?;
    let Some(name) = read_name(cursor) else {
        *cursor = start;
        return None;
    };
    Some(Variable { name })
}

/// Reads a non-composite value from a single token.
///
/// Name tokens are interpreted contextually: `true`/`false` become
/// booleans, `null` becomes the null value, and any other name is an enum
/// symbol — there is no separate keyword token kind.
fn read_simple_value<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<Value<'src>> {
    let token = cursor.peek()?;
    let value = match &token.kind {
        TokenKind::IntValue(text) => Value::Int(text.clone()),
        TokenKind::FloatValue(text) => Value::Float(text.clone()),
        TokenKind::StringValue(string_value) => Value::String(string_value.clone()),
        TokenKind::Name(text) => match text.as_ref() {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            "null" => Value::Null,
            _ => Value::Enum(text.clone()),
        },
        _ => return None,
    };
    cursor.next();
    Some(value)
}

/// Reads a `[ ... ]` list value. Zero elements are permitted, but a missing
/// `]` is a hard error anchored at the `[`.
fn read_list_value<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Vec<Value<'src>>>> {
    let Some(open_offset) = eat(cursor, &TokenKind::SquareBracketOpen) else {
        return Ok(None);
    };

    let mut values = Vec::new();
    while let Some(value) = read_value(cursor)? {
        values.push(value);
    }

    if eat(cursor, &TokenKind::SquareBracketClose).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::UnterminatedListValue,
            open_offset,
        ));
    }

    Ok(Some(values))
}

/// Reads a `{ ... }` object value. Zero fields are permitted, but a missing
/// `}` is a hard error anchored at the `{`. Duplicate field names are
/// preserved in order, not deduplicated.
fn read_object_value<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Vec<ObjectField<'src>>>> {
    let Some(open_offset) = eat(cursor, &TokenKind::CurlyBraceOpen) else {
        return Ok(None);
    };

    let mut fields = Vec::new();
    while let Some(field) = read_object_field(cursor)? {
        fields.push(field);
    }

    if eat(cursor, &TokenKind::CurlyBraceClose).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::UnterminatedObjectValue,
            open_offset,
        ));
    }

    Ok(Some(fields))
}

fn read_object_field<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<ObjectField<'src>>> {
    let start = *cursor;
    let Some(name_offset) = peek_offset(cursor) else {
        return Ok(None);
    };
    let Some(name) = read_name(cursor) else {
        return Ok(None);
    };
    if eat(cursor, &TokenKind::Colon).is_none() {
        *cursor = start;
        return Ok(None);
    }
    let Some(value) = read_value(cursor)? else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingObjectValue,
            name_offset,
        ));
    };
    Ok(Some(ObjectField { name, value }))
}

// =============================================================================
// Variable definitions and types
// =============================================================================

/// Reads a parenthesized variable-definition list, or nothing.
///
/// Mirrors [`read_arguments`]: once the `(` is consumed the list needs at
/// least one definition and a closing `)`, with both failures anchored at
/// the `(`.
fn read_variable_definitions<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Vec<VariableDefinition<'src>>>> {
    let Some(open_offset) = eat(cursor, &TokenKind::ParenOpen) else {
        return Ok(None);
    };

    let mut definitions = Vec::new();
    while let Some(definition) = read_variable_definition(cursor)? {
        definitions.push(definition);
    }

    if eat(cursor, &TokenKind::ParenClose).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::UnterminatedVariableDefinitionList,
            open_offset,
        ));
    }
    if definitions.is_empty() {
        return Err(RawParseError::new(
            ParseErrorKind::EmptyVariableDefinitionList,
            open_offset,
        ));
    }

    Ok(Some(definitions))
}

fn read_variable_definition<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<VariableDefinition<'src>>> {
    let Some(dollar_offset) = peek_offset(cursor) else {
        return Ok(None);
    };
    let Some(variable) = read_variable(cursor) else {
        return Ok(None);
    };

    // The variable definitely opened a definition; from here on a missing
    // `: Type` is malformed rather than "not a variable definition".
    if eat(cursor, &TokenKind::Colon).is_none() {
        return Err(RawParseError::new(
            ParseErrorKind::MissingVariableType,
            dollar_offset,
        ));
    }
    let Some(type_annotation) = read_type(cursor) else {
        return Err(RawParseError::new(
            ParseErrorKind::MissingVariableType,
            dollar_offset,
        ));
    };

    let default_value = read_default_value(cursor)?;
    let directives = read_directives(cursor)?;

    Ok(Some(VariableDefinition {
        variable,
        type_annotation,
        default_value,
        directives,
    }))
}

fn read_default_value<'a, 'src>(
    cursor: &mut TokenCursor<'a, 'src>,
) -> RuleResult<'src, Option<Value<'src>>> {
    let start = *cursor;
    if eat(cursor, &TokenKind::Equals).is_none() {
        return Ok(None);
    }
    match read_value(cursor)? {
        Some(value) => Ok(Some(value)),
        None => {
            *cursor = start;
            Ok(None)
        }
    }
}

/// Reads a type reference: non-null first (longest match), then list, then
/// named.
fn read_type<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<TypeAnnotation<'src>> {
    if let Some(annotation) = read_non_null_type(cursor) {
        return Some(annotation);
    }
    if let Some(annotation) = read_list_type(cursor) {
        return Some(annotation);
    }
    let name = read_name(cursor)?;
    Some(TypeAnnotation::Named(name))
}

/// Reads `Named!` or `[...]!`.
///
/// Consumes at most one trailing `!`: chaining `!!` is not a doubled
/// non-null, the second `!` is simply left for the caller to choke on.
fn read_non_null_type<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<TypeAnnotation<'src>> {
    let start = *cursor;

    let inner = if let Some(name) = read_name(cursor) {
        TypeAnnotation::Named(name)
    } else if let Some(list) = read_list_type(cursor) {
        list
    } else {
        *cursor = start;
        return None;
    };

    if eat(cursor, &TokenKind::Bang).is_none() {
        *cursor = start;
        return None;
    }

    Some(TypeAnnotation::NonNull(Box::new(inner)))
}

fn read_list_type<'a, 'src>(cursor: &mut TokenCursor<'a, 'src>) -> Option<TypeAnnotation<'src>> {
    let start = *cursor;
    eat(cursor, &TokenKind::SquareBracketOpen)?;
    let Some(element) = read_type(cursor) else {
        *cursor = start;
        return None;
    };
    if eat(cursor, &TokenKind::SquareBracketClose).is_none() {
        *cursor = start;
        return None;
    }
    Some(TypeAnnotation::List(Box::new(element)))
}
