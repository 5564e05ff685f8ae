//! Abstract Syntax Tree for TinyC.
//!
//! Every construct is a [`Node`]: a kind tag, an optional text payload, and
//! the children it owns. Statements, expressions and statement blocks all
//! share this shape.

/// Node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------
    /// A sequence of statements. Children are the statements in source order.
    StatementList,

    // ---------------------------------------------------------------------
    // Statements
    // ---------------------------------------------------------------------
    /// `int x;` with a single identifier child.
    Declaration,

    /// `x = expr;` with children `[identifier, expression]`.
    Assignment,

    /// `if (cond) { ... }` with children `[condition, statement list]`.
    If,

    // ---------------------------------------------------------------------
    // Expressions
    // ---------------------------------------------------------------------
    /// `left + right`
    Plus,

    /// `left - right`
    Minus,

    /// `left == right`, only in conditions.
    Equal,

    /// Identifier reference (leaf).
    Identifier,

    /// Number literal (leaf).
    Number,
}

/// A node in the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, text: Option<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            text,
            children,
        }
    }

    /// A node without children.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self::new(kind, Some(text.into()), Vec::new())
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Identifier, name)
    }

    pub fn number(literal: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Number, literal)
    }

    pub fn statement_list(statements: Vec<Node>) -> Self {
        Self::new(NodeKind::StatementList, None, statements)
    }

    /// A binary operator node; `op` is the operator's lexeme.
    pub fn binary(kind: NodeKind, op: impl Into<String>, left: Node, right: Node) -> Self {
        Self::new(kind, Some(op.into()), vec![left, right])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The text payload, or `""` when there is none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Drops descendants from a work list so that tearing down a deep tree,
/// such as a long `+` chain, does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
