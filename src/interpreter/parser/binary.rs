use crate::{
    ast::{NodeId, NodeKind, Terminal},
    interpreter::{
        lexer::TokenType,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// The rule is: `AddExp -> MulExp { ('+' | '-') MulExp }`
    ///
    /// The node's children are a flat, left-to-right sequence of operands with
    /// operator terminals between them; left associativity is applied by the
    /// evaluator's fold.
    pub(super) fn parse_add_exp(&mut self) -> ParseResult<NodeId> {
        self.parse_operator_chain(NodeKind::AddExp,
                                  &[TokenType::Plus, TokenType::Minus],
                                  Self::parse_mul_exp)
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `MulExp -> UnaryExp { ('*' | '/') UnaryExp }`
    pub(super) fn parse_mul_exp(&mut self) -> ParseResult<NodeId> {
        self.parse_operator_chain(NodeKind::MulExp,
                                  &[TokenType::Mult, TokenType::Div],
                                  Self::parse_unary_exp)
    }

    /// Parses `operand { operator operand }` into a single node of `kind`.
    ///
    /// The loop continues while tokens remain and the lookahead is one of
    /// `operators`. Operator tokens become terminal children directly, without
    /// an intermediate production node.
    fn parse_operator_chain(&mut self,
                            kind: NodeKind,
                            operators: &[TokenType],
                            parse_operand: fn(&mut Self) -> ParseResult<NodeId>)
                            -> ParseResult<NodeId> {
        let mut children = vec![parse_operand(self)?];

        while let Some(token) = self.cursor.peek()
              && operators.contains(&token.kind)
        {
            let operator = self.ast.push(NodeKind::Terminal(Terminal::Operator { kind:     token.kind,
                                                                                 position: token.position, }));
            self.cursor.advance();
            children.push(operator);
            children.push(parse_operand(self)?);
        }

        self.node(kind, &children)
    }
}
