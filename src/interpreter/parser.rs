/// Binary operator productions.
///
/// Parses the left-associative `AddExp` and `MulExp` levels of the grammar into
/// flat operand/operator sequences.
pub mod binary;
/// Parser entry points and shared state.
///
/// Defines the `Parser` type, its nesting limits, the `Exp` production and the
/// `parse` convenience function.
pub mod core;
/// Token cursor.
///
/// A forward-only cursor exposing `peek`, `advance` and `at_end` over the token
/// stream produced by the lexer.
pub mod cursor;
/// Unary and primary productions.
///
/// Parses prefix operators, parenthesized expressions and integer literals.
pub mod unary;
