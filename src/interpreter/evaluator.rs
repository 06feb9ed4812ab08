/// Binary operator evaluation.
///
/// Folds `AddExp` and `MulExp` nodes from left to right and performs checked
/// integer arithmetic.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, per-production dispatch, memoization of node
/// values and the `evaluate` entry point.
pub mod core;

/// Unary operator evaluation.
///
/// Handles `UnaryExp` and `UnaryOp` nodes, i.e. prefix `+` and `-`.
pub mod unary;
