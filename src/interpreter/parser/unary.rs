use tracing::trace;

use crate::{
    ast::{NodeId, NodeKind, Terminal},
    error::ParseError,
    interpreter::{
        lexer::TokenType,
        parser::core::{ParseResult, Parser},
    },
    util::radix::{parse_int_literal, resolve_radix},
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix operators are right-associative, so `-+-1` parses as
    /// `-(+(-1))`. Each call opens one nesting level, which bounds the
    /// recursion for both chained prefix operators and parentheses.
    ///
    /// Grammar:
    /// ```text
    ///     UnaryExp := PrimaryExp
    ///               | UnaryOp UnaryExp
    /// ```
    pub(super) fn parse_unary_exp(&mut self) -> ParseResult<NodeId> {
        self.enter()?;

        let node = match self.cursor.peek_kind() {
            Some(TokenType::Plus | TokenType::Minus) => {
                let op = self.parse_unary_op()?;
                let operand = self.parse_unary_exp()?;
                self.node(NodeKind::UnaryExp, &[op, operand])?
            },
            _ => {
                let primary = self.parse_primary_exp()?;
                self.node(NodeKind::UnaryExp, &[primary])?
            },
        };

        self.leave();
        Ok(node)
    }

    /// Parses a prefix operator.
    ///
    /// Grammar: `UnaryOp := '+' | '-'`
    ///
    /// # Errors
    /// `UnexpectedToken` if the lookahead is not `+` or `-`.
    pub(super) fn parse_unary_op(&mut self) -> ParseResult<NodeId> {
        let token = self.cursor
                        .peek()
                        .ok_or(ParseError::UnexpectedEndOfInput { expected: "'+' or '-'" })?;

        if !matches!(token.kind, TokenType::Plus | TokenType::Minus) {
            return Err(ParseError::UnexpectedToken { expected: "'+' or '-'",
                                                     found:    token.text.clone(),
                                                     position: token.position, });
        }
        self.cursor.advance();

        let terminal = self.ast.push(NodeKind::Terminal(Terminal::Operator { kind:     token.kind,
                                                                             position: token.position, }));
        self.node(NodeKind::UnaryOp, &[terminal])
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     PrimaryExp := '(' Exp ')'
    ///                 | Number
    /// ```
    ///
    /// # Errors
    /// `MissingClosingParen` if the parenthesized expression is followed by
    /// anything other than `)`, including the end of input.
    pub(super) fn parse_primary_exp(&mut self) -> ParseResult<NodeId> {
        let child = match self.cursor.peek() {
            Some(open) if open.kind == TokenType::LParen => {
                self.cursor.advance();
                let inner = self.parse_exp()?;

                match self.cursor.peek() {
                    Some(close) if close.kind == TokenType::RParen => {
                        self.cursor.advance();
                    },
                    found => {
                        let found = found.map(|token| token.text.clone());
                        return Err(ParseError::MissingClosingParen { position: open.position,
                                                                     found });
                    },
                }
                inner
            },
            _ => self.parse_number()?,
        };

        self.node(NodeKind::PrimaryExp, &[child])
    }

    /// Parses an integer literal and resolves its radix.
    ///
    /// Grammar: `Number := IntLiteral`
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead is not an integer literal.
    /// - `UnexpectedEndOfInput` if no tokens remain.
    /// - `MalformedLiteral` / `LiteralTooLarge` from radix resolution.
    pub(super) fn parse_number(&mut self) -> ParseResult<NodeId> {
        let token = self.cursor
                        .peek()
                        .ok_or(ParseError::UnexpectedEndOfInput { expected: "an integer literal" })?;

        if token.kind != TokenType::IntLiteral {
            return Err(ParseError::UnexpectedToken { expected: "an integer literal",
                                                     found:    token.text.clone(),
                                                     position: token.position, });
        }

        let value = parse_int_literal(&token.text, token.position)?;
        trace!(literal = %token.text, radix = %resolve_radix(&token.text).0, value, "resolved literal");
        self.cursor.advance();

        let literal = self.ast.push(NodeKind::Terminal(Terminal::Literal(value)));
        self.node(NodeKind::Number, &[literal])
    }
}
