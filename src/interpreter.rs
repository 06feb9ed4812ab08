/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST produced by the parser, assigns a value to every
/// node and returns the value of the root. It is the last stage of the
/// pipeline.
///
/// # Responsibilities
/// - Evaluates every grammar production with checked integer arithmetic.
/// - Memoizes intermediate results into the tree.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module turns a line of text into tokens.
///
/// The lexer is a small deterministic finite automaton fed one character at a
/// time. It recognizes integer literals and the operators `+ - * / ( )`, and
/// silently skips everything else. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Classifies characters and accumulates them into lexemes.
/// - Emits tokens with their exact text and source column.
/// - Never fails; unknown characters are discarded.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser is a recursive descent parser with one procedure per grammar
/// production. It consumes the token stream through a forward-only cursor and
/// builds the AST arena.
///
/// # Responsibilities
/// - Enforces operator precedence and left associativity through the grammar.
/// - Resolves the radix of integer literals.
/// - Reports the first syntax error and aborts.
pub mod parser;
