use tracing::{debug, trace};

use crate::{
    ast::{Ast, NodeId, NodeKind},
    error::ParseError,
    interpreter::{lexer::Token, parser::cursor::TokenCursor},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default bound on how deeply parentheses and unary operators may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Resource limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested unary expressions. Every parenthesis and every
    /// prefix `+`/`-` opens one level.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// A recursive descent parser over a token slice.
///
/// The parser owns the tree it is building and hands it off whole when
/// parsing succeeds. It is fail-fast: the first violation aborts the parse and
/// no partial tree is returned.
///
/// The grammar productions live in the sibling `binary` and `unary` modules.
pub struct Parser<'a> {
    pub(super) cursor: TokenCursor<'a>,
    pub(super) ast:    Ast,
    limits:            Limits,
    depth:             usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser with the default [`Limits`].
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_limits(tokens, Limits::default())
    }

    /// Creates a parser with custom [`Limits`].
    #[must_use]
    pub const fn with_limits(tokens: &'a [Token], limits: Limits) -> Self {
        Self { cursor: TokenCursor::new(tokens),
               ast: Ast::new(),
               limits,
               depth: 0 }
    }

    /// Builds the syntax tree for the whole token stream.
    ///
    /// The root is an `Exp` node. Every token must be consumed.
    ///
    /// # Errors
    /// Returns the first `ParseError` encountered, including
    /// `UnexpectedTrailingTokens` if tokens remain after the expression.
    pub fn parse(mut self) -> ParseResult<Ast> {
        let root = self.parse_exp()?;
        self.expect_end()?;
        self.ast.set_root(root);

        debug!(tokens = self.cursor.consumed(), nodes = self.ast.len(), "parsed expression");
        Ok(self.ast)
    }

    /// Parses the token stream as a single `Number` and returns its value.
    ///
    /// # Errors
    /// Returns a `ParseError` if the stream is not exactly one valid integer
    /// literal.
    pub fn parse_standalone_number(mut self) -> ParseResult<i64> {
        let number = self.parse_number()?;
        self.expect_end()?;
        self.ast.set_root(number);

        let value = self.ast
                        .children(number)
                        .first()
                        .and_then(|&literal| self.ast.get(literal))
                        .and_then(|literal| literal.value);
        value.ok_or(ParseError::UnexpectedEndOfInput { expected: "an integer literal" })
    }

    /// `Exp -> AddExp`
    pub(super) fn parse_exp(&mut self) -> ParseResult<NodeId> {
        let add = self.parse_add_exp()?;
        self.node(NodeKind::Exp, &[add])
    }

    /// Creates a node and attaches `children` to it in order.
    ///
    /// # Errors
    /// `DetachedNode` if a child already has a parent, which would leave it
    /// unreachable from the new node.
    pub(super) fn node(&mut self, kind: NodeKind, children: &[NodeId]) -> ParseResult<NodeId> {
        let id = self.ast.push(kind);
        for &child in children {
            if !self.ast.attach(id, child) {
                return Err(ParseError::DetachedNode { parent: id.index(),
                                                      child:  child.index(), });
            }
        }
        trace!(node = id.index(), %kind, children = children.len(), "reduced production");
        Ok(id)
    }

    /// Opens one nesting level, failing once the limit is exceeded.
    pub(super) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            // At end of input the limit is blamed on the last token read.
            let position = self.cursor
                               .peek()
                               .or_else(|| self.cursor.last_consumed())
                               .map_or(1, |token| token.position);
            return Err(ParseError::NestingTooDeep { limit: self.limits.max_depth,
                                                    position });
        }
        Ok(())
    }

    /// Closes the level opened by the matching [`Self::enter`].
    pub(super) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn expect_end(&self) -> ParseResult<()> {
        match self.cursor.peek() {
            Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.text.clone(),
                                                                      position: token.position, }),
            None => Ok(()),
        }
    }
}

/// Parses a token stream into a syntax tree with default limits.
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use radixcalc::{
///     ast::NodeKind,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let ast = parse(&tokenize("1+2*3")).unwrap();
/// let root = ast.root().unwrap();
/// assert_eq!(ast.get(root).unwrap().kind, NodeKind::Exp);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Ast> {
    Parser::new(tokens).parse()
}
