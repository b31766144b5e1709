/// An owned node of a binary expression tree.
///
/// `ExprNode` models the only two shapes the infix grammar produces: a
/// numeric *leaf* holding literal text, or an internal *branch* holding an
/// operator and exactly two children. A branch with fewer than two children
/// is unrepresentable; the grammar never builds a unary or ternary node.
///
/// Each node exclusively owns its children, so a tree is acyclic, has a
/// single root, and shares nothing with any other tree.
///
/// The leaf keeps its literal exactly as scanned, which means a token such
/// as `1.2.3` builds a perfectly fine leaf and is only rejected once it is
/// evaluated. The branch operator is a plain `char`, so a tree assembled by
/// hand can carry an operator the evaluator refuses.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// A numeric literal leaf.
    Leaf {
        /// The literal text, a contiguous run of digits and dots.
        literal: String,
    },
    /// An internal operator node with its two operands.
    Branch {
        /// The operator character.
        op:    char,
        /// The left operand subtree.
        left:  Box<Self>,
        /// The right operand subtree.
        right: Box<Self>,
    },
}

impl ExprNode {
    /// Creates a leaf node from literal text.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::ExprNode;
    ///
    /// let node = ExprNode::leaf("3.5");
    /// assert_eq!(node, ExprNode::Leaf { literal: "3.5".to_string() });
    /// ```
    #[must_use]
    pub fn leaf(literal: impl Into<String>) -> Self {
        Self::Leaf { literal: literal.into() }
    }

    /// Creates a branch node, taking ownership of both operand subtrees.
    ///
    /// ## Example
    /// ```
    /// use exprtree::{ast::ExprNode, engine::evaluator::evaluate_node};
    ///
    /// let sum = ExprNode::branch('+', ExprNode::leaf("2"), ExprNode::leaf("3"));
    /// assert_eq!(evaluate_node(&sum).unwrap(), 5.0);
    /// ```
    #[must_use]
    pub fn branch(op: char, left: Self, right: Self) -> Self {
        Self::Branch { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Returns `true` when the node is a numeric leaf.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::ExprNode;
    ///
    /// assert!(ExprNode::leaf("7").is_leaf());
    /// assert!(!ExprNode::branch('*', ExprNode::leaf("2"), ExprNode::leaf("3")).is_leaf());
    /// ```
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A single built expression, held as an optional root node.
///
/// Every call to [`build`](crate::engine::builder::build) returns a fresh,
/// independently owned tree value; the engine keeps no shared root between
/// expressions. A tree without a root comes from an input that contained no
/// operand at all (for example, the empty string): it evaluates to `0` and
/// renders as the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionTree {
    /// The root node, or `None` when the expression held no operand.
    pub root: Option<ExprNode>,
}
