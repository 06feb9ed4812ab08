use crate::interpreter::lexer::{Token, TokenType};

/// A forward-only view over a token slice.
///
/// The cursor never rewinds. Every parsing production advances it by exactly
/// the tokens it consumes, which keeps the consumption contract testable
/// without running the parser.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{
///     lexer::{TokenType, tokenize},
///     parser::cursor::TokenCursor,
/// };
///
/// let tokens = tokenize("1+2");
/// let mut cursor = TokenCursor::new(&tokens);
///
/// assert_eq!(cursor.peek_kind(), Some(TokenType::IntLiteral));
/// cursor.advance();
/// assert_eq!(cursor.advance().map(|t| t.kind), Some(TokenType::Plus));
/// cursor.advance();
/// assert!(cursor.at_end());
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// The token under the cursor, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// The kind of the token under the cursor.
    #[must_use]
    pub fn peek_kind(&self) -> Option<TokenType> {
        self.peek().map(|token| token.kind)
    }

    /// Consumes and returns the token under the cursor.
    ///
    /// At the end of input the cursor stays where it is and `None` is
    /// returned.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.index += 1;
        Some(token)
    }

    /// The most recently consumed token, `None` before the first advance.
    #[must_use]
    pub fn last_consumed(&self) -> Option<&'a Token> {
        self.index.checked_sub(1).and_then(|index| self.tokens.get(index))
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.index
    }
}
