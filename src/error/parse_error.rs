use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Positions are 1-based character columns of the offending token in the
/// input line.
pub enum ParseError {
    /// A production required a specific token and found another one.
    #[error("Error at column {position}: Unexpected token '{found}', expected {expected}.")]
    UnexpectedToken {
        /// What the production was looking for.
        expected: &'static str,
        /// The text of the token encountered.
        found:    String,
        /// Column of the token encountered.
        position: usize,
    },
    /// The token stream ended where an operand was still required.
    #[error("Error: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the production was looking for.
        expected: &'static str,
    },
    /// An opening parenthesis was never matched by a `)`.
    #[error("Error at column {position}: Expected closing parenthesis ')' for this '(' but found {}.",
            describe_found(.found.as_deref()))]
    MissingClosingParen {
        /// Column of the unmatched `(`.
        position: usize,
        /// The token found instead of `)`, if any.
        found:    Option<String>,
    },
    /// The digits of a literal are not valid for its radix.
    #[error("Error at column {position}: Malformed base-{radix} literal '{literal}'.")]
    MalformedLiteral {
        /// The literal text as lexed.
        literal:  String,
        /// The radix the literal resolved to.
        radix:    u32,
        /// Column of the literal.
        position: usize,
    },
    /// A literal is well formed but does not fit into a 64-bit integer.
    #[error("Error at column {position}: Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal text as lexed.
        literal:  String,
        /// Column of the literal.
        position: usize,
    },
    /// Parentheses or unary operators are nested deeper than allowed.
    #[error("Error at column {position}: Expression nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Column of the token that crossed the limit.
        position: usize,
    },
    /// Tokens remained after a complete expression was parsed.
    #[error("Error at column {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Column of the first leftover token.
        position: usize,
    },
    /// A reduced production could not take ownership of one of its children.
    #[error("Error: Syntax tree node {child} could not be attached to node {parent}.")]
    DetachedNode {
        /// The node being built.
        parent: usize,
        /// The child that already had a parent.
        child:  usize,
    },
}

fn describe_found(found: Option<&str>) -> String {
    found.map_or_else(|| "end of input".to_string(), |token| format!("'{token}'"))
}
