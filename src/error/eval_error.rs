use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// A `/` operation met a zero divisor.
    #[error("Error at column {position}: Division by zero.")]
    DivisionByZero {
        /// Column of the `/` operator.
        position: usize,
    },
    /// An operation produced a value outside the 64-bit integer range.
    #[error("Error at column {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Column of the operator that overflowed.
        position: usize,
    },
    /// A node does not have the shape its grammar production requires.
    ///
    /// Trees built by the parser never trigger this; trees assembled by hand
    /// through [`crate::ast::Ast`] can.
    #[error("Error: Malformed syntax tree at node {node}: {details}.")]
    MalformedTree {
        /// Index of the offending node in the arena.
        node:    usize,
        /// What was wrong with it.
        details: String,
    },
}
