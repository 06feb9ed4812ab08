use tracing::debug;

use crate::{
    ast::{Ast, AstNode, NodeId, NodeKind},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks a syntax tree and computes the value of its nodes.
///
/// Every non-terminal node gets its result memoized into
/// [`AstNode::value`] on the way back up, so evaluating a node twice only
/// walks its subtree once.
///
/// ## Usage
///
/// An `Evaluator` borrows the tree mutably for as long as it lives. Most
/// callers want [`evaluate`], which evaluates the root and returns the result.
pub struct Evaluator<'a> {
    pub(super) ast: &'a mut Ast,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `ast`.
    #[must_use]
    pub const fn new(ast: &'a mut Ast) -> Self {
        Self { ast }
    }

    /// Evaluates the root of the tree.
    ///
    /// # Errors
    /// `MalformedTree` if the tree has no root, otherwise any error from
    /// [`Self::eval`].
    pub fn eval_root(&mut self) -> EvalResult<i64> {
        let root = self.ast
                       .root()
                       .ok_or_else(|| EvalError::MalformedTree { node:    0,
                                                                 details: "tree has no root".into(), })?;
        self.eval(root)
    }

    /// Evaluates a node, dispatching on its production.
    ///
    /// - `Terminal`: its stored literal or operator tag.
    /// - `Exp`, `Number`, `PrimaryExp`: the value of the single child.
    /// - `UnaryExp`, `UnaryOp`: see the unary module.
    /// - `MulExp`, `AddExp`: a left fold over operands and operators.
    ///
    /// # Errors
    /// `DivisionByZero` and `Overflow` from arithmetic, `MalformedTree` if a
    /// node's children do not match its production.
    pub fn eval(&mut self, id: NodeId) -> EvalResult<i64> {
        let node = self.node(id)?;

        let value = match (node.kind, node.value) {
            (NodeKind::Terminal(terminal), value) => {
                return Ok(value.unwrap_or_else(|| terminal.value()));
            },
            (_, Some(cached)) => return Ok(cached),
            (NodeKind::Exp | NodeKind::Number | NodeKind::PrimaryExp, None) => {
                let child = self.only_child(id)?;
                self.eval(child)?
            },
            (NodeKind::UnaryExp, None) => self.eval_unary_exp(id)?,
            (NodeKind::UnaryOp, None) => self.eval_unary_op(id)?,
            (kind @ (NodeKind::MulExp | NodeKind::AddExp), None) => {
                self.eval_operator_chain(id, kind)?
            },
        };

        if let Some(node) = self.ast.get_mut(id) {
            node.value = Some(value);
        }
        Ok(value)
    }

    pub(super) fn node(&self, id: NodeId) -> EvalResult<&AstNode> {
        self.ast
            .get(id)
            .ok_or_else(|| malformed(id, "node does not exist"))
    }

    /// The children of `id`, copied so the tree can be mutated while they are
    /// visited.
    pub(super) fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        self.ast.children(id).to_vec()
    }

    fn only_child(&self, id: NodeId) -> EvalResult<NodeId> {
        match self.ast.children(id) {
            [child] => Ok(*child),
            children => Err(malformed(id,
                                      &format!("expected exactly one child, found {}",
                                               children.len()))),
        }
    }

    /// Renders the chain of productions enclosing `id`, innermost first.
    pub(super) fn describe_path(&self, id: NodeId) -> String {
        std::iter::once(id).chain(self.ast.ancestors(id))
                           .filter_map(|node| self.ast.get(node))
                           .map(|node| node.kind.to_string())
                           .collect::<Vec<_>>()
                           .join(" < ")
    }
}

/// Builds a `MalformedTree` error for `id`.
pub(super) fn malformed(id: NodeId, details: &str) -> EvalError {
    EvalError::MalformedTree { node:    id.index(),
                               details: details.to_string(), }
}

/// Evaluates the root of `ast` and returns the result.
///
/// Node values are memoized into the tree, so the tree can be printed
/// afterwards with every intermediate result.
///
/// # Errors
/// Returns the first `EvalError` encountered; evaluation stops there.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};
///
/// let mut ast = parse(&tokenize("(1+2)*3")).unwrap();
/// assert_eq!(evaluate(&mut ast).unwrap(), 9);
/// ```
pub fn evaluate(ast: &mut Ast) -> EvalResult<i64> {
    let value = Evaluator::new(ast).eval_root()?;
    debug!(value, "evaluated expression");
    Ok(value)
}
