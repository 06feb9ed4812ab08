//! # radixcalc
//!
//! radixcalc evaluates one line of integer arithmetic.
//! Literals may be written in decimal, octal (`017`), hexadecimal (`0x1A`) or
//! binary (`0b101`); expressions combine them with `+ - * /`, parentheses and
//! prefix `+`/`-`.
//!
//! The pipeline runs in three stages:
//! characters → [`interpreter::lexer`] → tokens → [`interpreter::parser`] →
//! [`ast::Ast`] → [`interpreter::evaluator`] → `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Ast,
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::core::{Limits, Parser},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the AST arena, node handles and the node kinds that
/// mirror the grammar productions. The AST is built by the parser and
/// annotated with values by the evaluator.
///
/// # Responsibilities
/// - Stores nodes in an arena addressed by [`ast::NodeId`].
/// - Keeps children owned top-down and parents as non-owning handles.
/// - Renders a tree for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can abort the pipeline. The lexer has
/// no error type: characters it does not recognize are skipped.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Attaches source columns for diagnostics.
/// - Combines both into a crate-level [`error::Error`].
pub mod error;
/// Orchestrates the lexer, parser and evaluator.
///
/// This module ties together the three stages of the pipeline and exposes
/// each of them for use on its own.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Currently holds integer literal radix resolution, which the parser uses
/// when it consumes a literal token.
pub mod util;

/// Evaluates one line of input and returns its value.
///
/// The line is tokenized (with a trailing delimiter appended so the last
/// lexeme is flushed), parsed and evaluated. The first error aborts the
/// pipeline.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use radixcalc::{error::{Error, EvalError}, evaluate_line};
///
/// assert_eq!(evaluate_line("1+2*3").unwrap(), 7);
/// assert_eq!(evaluate_line("0x1A+2").unwrap(), 28);
///
/// let err = evaluate_line("3/0").unwrap_err();
/// assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate_line(source: &str) -> Result<i64, Error> {
    evaluate_line_with_limits(source, Limits::default())
}

/// Evaluates one line of input with custom parser [`Limits`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn evaluate_line_with_limits(source: &str, limits: Limits) -> Result<i64, Error> {
    inspect_line(source, limits).result
}

/// Everything one pass over a line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// The token stream, including the lexemes that preceded a parse error.
    pub tokens: Vec<Token>,
    /// The syntax tree with every value evaluation managed to memoize. `None`
    /// when parsing failed.
    pub ast:    Option<Ast>,
    /// The value of the line, or the first error.
    pub result: Result<i64, Error>,
}

/// Runs the whole pipeline over one line and keeps its intermediate stages.
///
/// The tree is kept even when evaluation fails, so it shows how far
/// evaluation got.
///
/// # Examples
/// ```
/// use radixcalc::{error::{Error, EvalError}, inspect_line};
///
/// let report = inspect_line("4/(2-2)", Default::default());
/// assert_eq!(report.tokens.len(), 7);
/// assert!(report.ast.is_some());
/// assert!(matches!(report.result, Err(Error::Eval(EvalError::DivisionByZero { position: 2 }))));
/// ```
#[must_use]
pub fn inspect_line(source: &str, limits: Limits) -> LineReport {
    let tokens = tokenize(source);
    debug!(count = tokens.len(), "tokenized input");

    let mut ast = match Parser::with_limits(&tokens, limits).parse() {
        Ok(ast) => ast,
        Err(e) => {
            return LineReport { tokens,
                                ast: None,
                                result: Err(e.into()) };
        },
    };
    let result = evaluate(&mut ast).map_err(Error::from);

    LineReport { tokens,
                 ast: Some(ast),
                 result }
}

/// Lexes `source` and parses it as a single integer literal.
///
/// This runs only the `Number` production, which makes radix resolution
/// observable on its own.
///
/// # Errors
/// Returns a `ParseError` if the input is not exactly one valid literal.
///
/// # Examples
/// ```
/// use radixcalc::lex_and_parse_number;
///
/// assert_eq!(lex_and_parse_number("0x1A").unwrap(), 26);
/// assert_eq!(lex_and_parse_number("0b101").unwrap(), 5);
/// assert_eq!(lex_and_parse_number("017").unwrap(), 15);
/// assert_eq!(lex_and_parse_number("17").unwrap(), 17);
/// ```
pub fn lex_and_parse_number(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source);
    Ok(Parser::new(&tokens).parse_standalone_number()?)
}
