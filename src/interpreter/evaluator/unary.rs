use tracing::debug;

use crate::{
    ast::{NodeId, NodeKind, Terminal},
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, malformed},
        lexer::TokenType,
    },
};

impl Evaluator<'_> {
    /// Evaluates a `UnaryExp` node.
    ///
    /// A single `PrimaryExp` child passes its value through. A `(UnaryOp,
    /// UnaryExp)` pair applies the operator: `+` keeps the operand, `-` negates
    /// it.
    ///
    /// # Errors
    /// `Overflow` when negating `i64::MIN`, `MalformedTree` for any other
    /// child layout or an operator tag other than `+`/`-`.
    pub(super) fn eval_unary_exp(&mut self, id: NodeId) -> EvalResult<i64> {
        match self.children_of(id).as_slice() {
            &[primary] => {
                if self.node(primary)?.kind != NodeKind::PrimaryExp {
                    return Err(malformed(id, "single child of UnaryExp must be a PrimaryExp"));
                }
                self.eval(primary)
            },
            &[op, operand] => {
                let tag = self.eval(op)?;
                let value = self.eval(operand)?;

                if tag == TokenType::Plus.tag() {
                    Ok(value)
                } else if tag == TokenType::Minus.tag() {
                    let position = self.operator_position(op)?;
                    value.checked_neg().ok_or_else(|| {
                        debug!(path = %self.describe_path(op), "negation overflowed");
                        EvalError::Overflow { position }
                    })
                } else {
                    Err(malformed(op, "unary operator must be '+' or '-'"))
                }
            },
            _ => Err(malformed(id, "UnaryExp must have one or two children")),
        }
    }

    /// Evaluates a `UnaryOp` node to the tag of its operator terminal.
    ///
    /// The tag is a discriminant for the enclosing `UnaryExp`, not an
    /// arithmetic value.
    pub(super) fn eval_unary_op(&mut self, id: NodeId) -> EvalResult<i64> {
        match self.children_of(id).as_slice() {
            &[terminal] => self.eval(terminal),
            _ => Err(malformed(id, "UnaryOp must have exactly one child")),
        }
    }

    /// Finds the source column of the operator terminal at or directly below
    /// `id`.
    pub(super) fn operator_position(&self, id: NodeId) -> EvalResult<usize> {
        let terminal = match self.node(id)?.kind {
            NodeKind::Terminal(_) => id,
            _ => self.children_of(id)
                     .first()
                     .copied()
                     .ok_or_else(|| malformed(id, "operator node has no terminal"))?,
        };

        match self.node(terminal)?.kind {
            NodeKind::Terminal(Terminal::Operator { position, .. }) => Ok(position),
            _ => Err(malformed(terminal, "expected an operator terminal")),
        }
    }
}
