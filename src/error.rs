use thiserror::Error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the syntax tree,
/// such as division by zero or integer overflow.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a syntax
/// tree. Parse errors include unexpected tokens, unbalanced parentheses and
/// invalid literals.
pub mod parse_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any error that aborts the pipeline.
///
/// The lexer never fails, so only the parser and the evaluator contribute
/// variants. Conversions are derived so `?` works across phase boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token stream did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
