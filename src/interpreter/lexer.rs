use std::fmt;

use tracing::trace;

/// The kind of a lexical token.
///
/// This enum is the shared vocabulary between the lexer and the parser. Every
/// operator character maps to exactly one variant; integer literals of every
/// radix share [`TokenType::IntLiteral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Integer literal, such as `42`, `017`, `0x1A` or `0b101`.
    IntLiteral,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenType {
    /// Maps a single operator character to its token type.
    ///
    /// Returns `None` for characters outside `+ - * / ( )`.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::lexer::TokenType;
    ///
    /// assert_eq!(TokenType::from_operator('*'), Some(TokenType::Mult));
    /// assert_eq!(TokenType::from_operator('%'), None);
    /// ```
    #[must_use]
    pub const fn from_operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mult),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// The integer tag stored in terminal operator nodes of the syntax tree.
    #[must_use]
    pub const fn tag(self) -> i64 {
        self as i64
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IntLiteral => "IntLiteral",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Mult => "Mult",
            Self::Div => "Div",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
        };
        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// Tokens are produced once by the [`Lexer`] and never mutated. The text is
/// kept verbatim because the radix of a literal is only resolved by the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification of the lexeme.
    pub kind:     TokenType,
    /// The exact characters that formed the lexeme.
    pub text:     String,
    /// 1-based column of the first character of the lexeme.
    pub position: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t@{}", self.kind, self.text, self.position)
    }
}

/// The states of the lexer automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between lexemes; whitespace and unknown characters land here.
    Empty,
    /// Accumulating an integer literal run.
    IntLiteral,
    /// Holding a single operator character.
    Operator,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::IntLiteral => "IntLiteral",
            Self::Operator => "Operator",
        };
        f.write_str(name)
    }
}

/// A deterministic finite automaton that turns characters into tokens.
///
/// Characters are fed one at a time. A token is only recognized once a
/// character arrives that cannot extend it, so emission is delayed by one
/// character and the final lexeme of an input needs a trailing delimiter.
/// [`tokenize`] appends one automatically.
///
/// Only ASCII digits start a literal. Inside a literal, `a`-`f`, `A`-`F`, `x`
/// and `X` are accepted as well so prefixed literals stay in one run; whether
/// the run is a valid number is decided by the parser.
#[derive(Debug)]
pub struct Lexer {
    state:    State,
    text:     String,
    start:    usize,
    position: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Creates a lexer in the [`State::Empty`] state at column 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { state:    State::Empty,
               text:     String::new(),
               start:    0,
               position: 0, }
    }

    /// The current automaton state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the automaton to [`State::Empty`] and drops any accumulated
    /// text. Column counting is not affected.
    pub fn reset(&mut self) {
        self.state = State::Empty;
        self.text.clear();
    }

    /// Feeds one character into the automaton.
    ///
    /// Returns the token completed by this character, if any. The character
    /// itself is never part of the returned token: it either starts a new run,
    /// extends the current one, or is discarded.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::lexer::{Lexer, State, TokenType};
    ///
    /// let mut lexer = Lexer::new();
    /// assert!(lexer.feed('1').is_none());
    /// assert!(lexer.feed('2').is_none());
    /// assert_eq!(lexer.state(), State::IntLiteral);
    ///
    /// let token = lexer.feed('+').unwrap();
    /// assert_eq!(token.kind, TokenType::IntLiteral);
    /// assert_eq!(token.text, "12");
    /// assert_eq!(lexer.state(), State::Operator);
    /// ```
    pub fn feed(&mut self, c: char) -> Option<Token> {
        self.position += 1;

        match self.state {
            State::Empty => {
                self.begin_run(c);
                None
            },
            State::IntLiteral if extends_literal(c) => {
                self.text.push(c);
                None
            },
            State::IntLiteral | State::Operator => {
                let token = self.take_token();
                self.begin_run(c);
                token
            },
        }
    }

    /// Starts a new run with `c`, or moves to [`State::Empty`] if `c` cannot
    /// start one.
    fn begin_run(&mut self, c: char) {
        self.text.clear();
        self.start = self.position;

        if TokenType::from_operator(c).is_some() {
            self.state = State::Operator;
            self.text.push(c);
        } else if c.is_ascii_digit() {
            self.state = State::IntLiteral;
            self.text.push(c);
        } else {
            if !c.is_whitespace() {
                trace!(character = ?c, position = self.position, "discarding character");
            }
            self.state = State::Empty;
        }
    }

    /// Builds the token for the accumulated run.
    fn take_token(&mut self) -> Option<Token> {
        let text = std::mem::take(&mut self.text);
        let kind = match self.state {
            State::Empty => return None,
            State::IntLiteral => TokenType::IntLiteral,
            State::Operator => text.chars().next().and_then(TokenType::from_operator)?,
        };

        trace!(kind = %kind, text = %text, position = self.start, "emitting token");
        Some(Token { kind,
                     text,
                     position: self.start })
    }
}

/// Characters accepted inside an integer literal run.
const fn extends_literal(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | 'X')
}

/// Converts a whole line into tokens.
///
/// Every character is fed to a fresh [`Lexer`], followed by a synthetic `'\n'`
/// so that the last lexeme is flushed even when the input does not end with a
/// delimiter. Unrecognized characters are skipped.
///
/// # Example
/// ```
/// use radixcalc::interpreter::lexer::{TokenType, tokenize};
///
/// let kinds: Vec<_> = tokenize("(0x1A+2)").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenType::LParen,
///             TokenType::IntLiteral,
///             TokenType::Plus,
///             TokenType::IntLiteral,
///             TokenType::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new();

    source.chars()
          .chain(std::iter::once('\n'))
          .filter_map(|c| lexer.feed(c))
          .collect()
}
