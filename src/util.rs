/// Integer literal radix resolution.
///
/// This module decides which base a literal is written in from its prefix and
/// converts its digits into an `i64`. It runs when the parser consumes a
/// literal token, never in the lexer, so the lexer can stay a pure character
/// classifier.
///
/// All conversions return a `Result`, which is `Ok` if the literal is valid for
/// its radix and fits into an `i64`, or a `ParseError` otherwise.
pub mod radix;
