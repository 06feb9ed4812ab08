use std::fmt;

use crate::interpreter::lexer::TokenType;

/// Handle to a node stored in an [`Ast`].
///
/// Handles are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The payload of a terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// A resolved integer literal.
    Literal(i64),
    /// An operator token, kept with its source column for diagnostics.
    Operator {
        /// Which operator.
        kind:     TokenType,
        /// 1-based column of the operator in the input.
        position: usize,
    },
}

impl Terminal {
    /// The value a terminal evaluates to: the literal itself, or the
    /// operator's tag.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Literal(value) => value,
            Self::Operator { kind, .. } => kind.tag(),
        }
    }
}

/// The grammar production a node was built from.
///
/// Each non-terminal corresponds to one rule of the grammar:
///
/// ```text
/// Exp        -> AddExp
/// AddExp     -> MulExp { ('+' | '-') MulExp }
/// MulExp     -> UnaryExp { ('*' | '/') UnaryExp }
/// UnaryExp   -> PrimaryExp | UnaryOp UnaryExp
/// UnaryOp    -> '+' | '-'
/// PrimaryExp -> '(' Exp ')' | Number
/// Number     -> IntLiteral
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf carrying a literal value or an operator tag.
    Terminal(Terminal),
    /// `Exp -> AddExp`
    Exp,
    /// `Number -> IntLiteral`
    Number,
    /// `PrimaryExp -> '(' Exp ')' | Number`
    PrimaryExp,
    /// `UnaryExp -> PrimaryExp | UnaryOp UnaryExp`
    UnaryExp,
    /// `UnaryOp -> '+' | '-'`
    UnaryOp,
    /// `MulExp -> UnaryExp { ('*' | '/') UnaryExp }`
    MulExp,
    /// `AddExp -> MulExp { ('+' | '-') MulExp }`
    AddExp,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal(_) => "Terminal",
            Self::Exp => "Exp",
            Self::Number => "Number",
            Self::PrimaryExp => "PrimaryExp",
            Self::UnaryExp => "UnaryExp",
            Self::UnaryOp => "UnaryOp",
            Self::MulExp => "MulExp",
            Self::AddExp => "AddExp",
        };
        f.write_str(name)
    }
}

/// A single node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    /// The production or terminal this node represents.
    pub kind:  NodeKind,
    /// For terminals, the literal or operator tag. For everything else, the
    /// memoized evaluation result, `None` until the evaluator has visited it.
    pub value: Option<i64>,
    children:  Vec<NodeId>,
    parent:    Option<NodeId>,
}

impl AstNode {
    /// Child handles in grammar order; operators interleave with operands.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The enclosing node, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An abstract syntax tree stored as an arena.
///
/// Nodes own their children through [`NodeId`] handles and refer back to their
/// parent through a non-owning handle. Every node except the root has exactly
/// one parent, whose children list contains it exactly once. The whole tree is
/// dropped as a unit together with the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<AstNode>,
    root:  Option<NodeId>,
}

impl Ast {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(),
               root:  None, }
    }

    /// Adds a detached node and returns its handle.
    ///
    /// Terminal nodes start with their value set; every other node starts
    /// unevaluated.
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        let value = match kind {
            NodeKind::Terminal(terminal) => Some(terminal.value()),
            _ => None,
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(AstNode { kind,
                                  value,
                                  children: Vec::new(),
                                  parent: None });
        id
    }

    /// Appends `child` to the children of `parent` and records the back
    /// reference.
    ///
    /// Returns `false` and leaves the tree untouched if either handle is
    /// unknown, `child` already has a parent or is the root, or `child` is
    /// `parent` or one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return false;
        }
        if self.nodes[child.0].parent.is_some() || Some(child) == self.root {
            return false;
        }
        if std::iter::once(parent).chain(self.ancestors(parent))
                                  .any(|id| id == child)
        {
            return false;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Marks `id` as the root of the tree.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// The root node, if one has been set.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&AstNode> {
        self.nodes.get(id.0)
    }

    /// Looks up a node for mutation.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut AstNode> {
        self.nodes.get_mut(id.0)
    }

    /// Child handles of `id`, empty for unknown handles.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(AstNode::children).unwrap_or_default()
    }

    /// Parent handle of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(AstNode::parent)
    }

    /// Walks from the parent of `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&current| self.parent(current))
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes with their handles, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AstNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Writes `id` and its subtree, one node per line, indented by depth.
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let Some(node) = self.get(id) else {
            return Ok(());
        };

        write!(f, "{:indent$}{}", "", node.kind, indent = depth * 2)?;
        match (node.kind, node.value) {
            (NodeKind::Terminal(Terminal::Operator { kind, .. }), _) => write!(f, " {kind}")?,
            (_, Some(value)) => write!(f, " = {value}")?,
            (_, None) => {},
        }
        writeln!(f)?;

        for &child in node.children() {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.fmt_node(f, root, 0),
            None => Ok(()),
        }
    }
}
