use crate::ast::{ExprNode, ExpressionTree};

/// Renders the tree in in-order form: the conventional infix reading.
///
/// The output carries no parentheses, so it does not disambiguate
/// precedence the way the original expression did; it is for display only
/// and cannot be fed back into the builder to recover the same tree.
///
/// # Parameters
/// - `tree`: The tree to render.
///
/// # Returns
/// The node tokens in left-value-right order, joined by single spaces; the
/// empty string for an empty tree.
///
/// # Example
/// ```
/// use exprtree::engine::{builder::build, render::render_infix};
///
/// let tree = build("(2+3)*4").unwrap();
/// assert_eq!(render_infix(&tree), "2 + 3 * 4");
/// ```
#[must_use]
pub fn render_infix(tree: &ExpressionTree) -> String {
    let mut tokens = Vec::new();
    if let Some(root) = &tree.root {
        collect_in_order(root, &mut tokens);
    }
    tokens.join(" ")
}

/// Renders the tree in pre-order form: prefix (Polish) notation.
///
/// # Parameters
/// - `tree`: The tree to render.
///
/// # Returns
/// The node tokens in value-left-right order, joined by single spaces; the
/// empty string for an empty tree.
///
/// # Example
/// ```
/// use exprtree::engine::{builder::build, render::render_prefix};
///
/// let tree = build("3 + 4 * 5").unwrap();
/// assert_eq!(render_prefix(&tree), "+ 3 * 4 5");
/// ```
#[must_use]
pub fn render_prefix(tree: &ExpressionTree) -> String {
    let mut tokens = Vec::new();
    if let Some(root) = &tree.root {
        collect_pre_order(root, &mut tokens);
    }
    tokens.join(" ")
}

/// Renders the tree in post-order form: postfix (reverse Polish) notation.
///
/// # Parameters
/// - `tree`: The tree to render.
///
/// # Returns
/// The node tokens in left-right-value order, joined by single spaces; the
/// empty string for an empty tree.
///
/// # Example
/// ```
/// use exprtree::engine::{builder::build, render::render_postfix};
///
/// let tree = build("3 + 4 * 5").unwrap();
/// assert_eq!(render_postfix(&tree), "3 4 5 * +");
/// ```
#[must_use]
pub fn render_postfix(tree: &ExpressionTree) -> String {
    let mut tokens = Vec::new();
    if let Some(root) = &tree.root {
        collect_post_order(root, &mut tokens);
    }
    tokens.join(" ")
}

fn collect_in_order(node: &ExprNode, tokens: &mut Vec<String>) {
    match node {
        ExprNode::Leaf { literal } => tokens.push(literal.clone()),
        ExprNode::Branch { op, left, right } => {
            collect_in_order(left, tokens);
            tokens.push(op.to_string());
            collect_in_order(right, tokens);
        },
    }
}

fn collect_pre_order(node: &ExprNode, tokens: &mut Vec<String>) {
    match node {
        ExprNode::Leaf { literal } => tokens.push(literal.clone()),
        ExprNode::Branch { op, left, right } => {
            tokens.push(op.to_string());
            collect_pre_order(left, tokens);
            collect_pre_order(right, tokens);
        },
    }
}

fn collect_post_order(node: &ExprNode, tokens: &mut Vec<String>) {
    match node {
        ExprNode::Leaf { literal } => tokens.push(literal.clone()),
        ExprNode::Branch { op, left, right } => {
            collect_post_order(left, tokens);
            collect_post_order(right, tokens);
            tokens.push(op.to_string());
        },
    }
}
