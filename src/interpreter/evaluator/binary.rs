use std::fmt;

use tracing::debug;

use crate::{
    ast::{NodeId, NodeKind, Terminal},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, malformed},
        lexer::TokenType,
    },
};

/// The arithmetic operators that can appear between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator, `None` for parentheses
    /// and literals.
    #[must_use]
    pub const fn from_token(kind: TokenType) -> Option<Self> {
        match kind {
            TokenType::Plus => Some(Self::Add),
            TokenType::Minus => Some(Self::Sub),
            TokenType::Mult => Some(Self::Mul),
            TokenType::Div => Some(Self::Div),
            TokenType::IntLiteral | TokenType::LParen | TokenType::RParen => None,
        }
    }

    /// Whether the operator belongs in a node of the given production.
    const fn belongs_to(self, kind: NodeKind) -> bool {
        matches!((self, kind),
                 (Self::Add | Self::Sub, NodeKind::AddExp) | (Self::Mul | Self::Div, NodeKind::MulExp))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

impl Evaluator<'_> {
    /// Applies one arithmetic operator to two integers.
    ///
    /// Division truncates toward zero. All operations are checked.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `Overflow` if the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{
    ///     error::EvalError,
    ///     interpreter::evaluator::{binary::BinaryOperator, core::Evaluator},
    /// };
    ///
    /// assert_eq!(Evaluator::apply_binary(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
    ///
    /// let err = Evaluator::apply_binary(BinaryOperator::Div, 3, 0, 2).unwrap_err();
    /// assert_eq!(err, EvalError::DivisionByZero { position: 2 });
    /// ```
    pub fn apply_binary(op: BinaryOperator,
                        left: i64,
                        right: i64,
                        position: usize)
                        -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(EvalError::Overflow { position })
    }

    /// Evaluates an `AddExp` or `MulExp` node.
    ///
    /// The first child seeds the accumulator; the remaining children are
    /// `(operator, operand)` pairs folded in from left to right.
    ///
    /// # Errors
    /// Arithmetic errors from [`Self::apply_binary`], or `MalformedTree` if
    /// the children do not alternate operand/operator or an operator does not
    /// belong to the production.
    pub(super) fn eval_operator_chain(&mut self, id: NodeId, kind: NodeKind) -> EvalResult<i64> {
        let children = self.children_of(id);
        let Some((&first, rest)) = children.split_first() else {
            return Err(malformed(id, "operator chain has no operands"));
        };
        if rest.len() % 2 != 0 {
            return Err(malformed(id, "operator without a right operand"));
        }

        let mut accumulator = self.eval(first)?;

        for pair in rest.chunks_exact(2) {
            let (op_node, operand) = (pair[0], pair[1]);
            let (op, position) = self.binary_operator(op_node)?;
            if !op.belongs_to(kind) {
                return Err(malformed(op_node, &format!("operator '{op}' does not belong in {kind}")));
            }

            let right = self.eval(operand)?;
            accumulator = Self::apply_binary(op, accumulator, right, position).inspect_err(|e| {
                              debug!(path = %self.describe_path(op_node), error = %e, "arithmetic failed");
                          })?;
        }

        Ok(accumulator)
    }

    fn binary_operator(&self, id: NodeId) -> EvalResult<(BinaryOperator, usize)> {
        match self.node(id)?.kind {
            NodeKind::Terminal(Terminal::Operator { kind, position }) => {
                BinaryOperator::from_token(kind).map(|op| (op, position))
                                                .ok_or_else(|| malformed(id, "not an arithmetic operator"))
            },
            _ => Err(malformed(id, "expected an operator terminal")),
        }
    }
}
