use crate::{
    ast::{ExprNode, ExpressionTree},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a built expression tree to its numeric result.
///
/// A tree without a root (built from an input with no operand) evaluates
/// to `0.0` as a defensive default; every other outcome comes from the
/// recursive walk over the root node.
///
/// # Parameters
/// - `tree`: The tree to evaluate.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Example
/// ```
/// use exprtree::{ast::ExpressionTree, engine::{builder::build, evaluator::evaluate}};
///
/// let tree = build("2 + 3 * 4").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 14.0);
///
/// assert_eq!(evaluate(&ExpressionTree::default()).unwrap(), 0.0);
/// ```
pub fn evaluate(tree: &ExpressionTree) -> EvalResult<f64> {
    tree.root.as_ref().map_or(Ok(0.0), evaluate_node)
}

/// Evaluates a single subtree with a recursive post-order walk.
///
/// Both operands of a branch are resolved before its operator is applied,
/// and a division checks its right operand against zero before dividing.
/// The walk never mutates the tree, so it is safe to evaluate the same
/// tree any number of times.
///
/// # Parameters
/// - `node`: Root of the subtree to evaluate.
///
/// # Returns
/// The numeric value of the subtree.
///
/// # Errors
/// - `MalformedNumber` when a leaf literal does not parse as a number.
/// - `DivisionByZero` when the right operand of `/` evaluates to zero.
/// - `UnsupportedOperator` when a branch carries an operator outside
///   `+ - * /`.
///
/// # Example
/// ```
/// use exprtree::{ast::ExprNode, engine::evaluator::evaluate_node, error::EvalError};
///
/// let half = ExprNode::branch('/', ExprNode::leaf("1"), ExprNode::leaf("2"));
/// assert_eq!(evaluate_node(&half).unwrap(), 0.5);
///
/// let modulo = ExprNode::branch('%', ExprNode::leaf("5"), ExprNode::leaf("3"));
/// assert!(matches!(evaluate_node(&modulo),
///                  Err(EvalError::UnsupportedOperator { operator: '%' })));
/// ```
pub fn evaluate_node(node: &ExprNode) -> EvalResult<f64> {
    match node {
        ExprNode::Leaf { literal } => {
            literal.parse()
                   .map_err(|_| EvalError::MalformedNumber { literal: literal.clone() })
        },

        ExprNode::Branch { op, left, right } => {
            let left = evaluate_node(left)?;
            let right = evaluate_node(right)?;

            match op {
                '+' => Ok(left + right),
                '-' => Ok(left - right),
                '*' => Ok(left * right),
                '/' => {
                    if right == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(left / right)
                },
                other => Err(EvalError::UnsupportedOperator { operator: *other }),
            }
        },
    }
}
