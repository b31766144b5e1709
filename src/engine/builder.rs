use logos::Logos;

use crate::{
    ast::{ExprNode, ExpressionTree},
    engine::lexer::{Token, operator_char},
    error::BuildError,
};

/// Result type used by the tree builder.
pub type BuildResult<T> = Result<T, BuildError>;

/// Converts a validated infix expression into a binary expression tree.
///
/// The algorithm is the dual-stack shunting-yard variant that assembles a
/// tree instead of a flat postfix list. A single left-to-right scan drives
/// two stacks: an operator stack of characters (including `(`) and an
/// operand stack of owned tree nodes.
///
/// - A number token pushes a leaf node.
/// - `(` is pushed onto the operator stack.
/// - `)` reduces until the matching `(` surfaces, then discards it.
/// - An operator reduces while the stack top is not `(` and binds at least
///   as tightly, then pushes itself. The `<=` comparison makes operators of
///   equal precedence group left to right, so `8-3-2` becomes `(8-3)-2`.
/// - At the end of the scan the remaining operators are reduced and the top
///   of the operand stack becomes the root.
///
/// The input must already have passed
/// [`validate`](crate::engine::validator::validate). On input that breaks
/// that precondition the result is still defined: unrecognized characters
/// are skipped, an operand-stack underflow reports `MissingOperand`, an
/// input with no operand at all builds an empty tree, and operands left
/// below the final root are discarded.
///
/// # Parameters
/// - `expr`: The validated expression string.
///
/// # Returns
/// The built tree, owning every node created during the scan.
///
/// # Errors
/// - `MissingOperand` if an operator is reduced with fewer than two
///   operands on the operand stack, which validation does not fully rule
///   out (a leading operator such as `+2` passes it).
///
/// # Example
/// ```
/// use exprtree::engine::{builder::build, render::render_postfix};
///
/// let tree = build("8 - 3 - 2").unwrap();
/// assert_eq!(render_postfix(&tree), "8 3 - 2 -");
/// ```
pub fn build(expr: &str) -> BuildResult<ExpressionTree> {
    let mut operators: Vec<char> = Vec::new();
    let mut operands: Vec<ExprNode> = Vec::new();

    let mut lexer = Token::lexer(expr);
    while let Some(token) = lexer.next() {
        // Unrecognized characters are skipped; `validate` rejects them for
        // input that honors the precondition.
        let Ok(token) = token else { continue };

        match token {
            Token::Number(literal) => operands.push(ExprNode::leaf(literal)),

            Token::LParen => operators.push('('),

            Token::RParen => {
                while let Some(&top) = operators.last() {
                    if top == '(' {
                        break;
                    }
                    operators.pop();
                    reduce(top, &mut operands)?;
                }
                // Discard the `(` itself.
                operators.pop();
            },

            other => {
                if let Some(op) = operator_char(&other) {
                    while let Some(&top) = operators.last() {
                        if top == '(' || precedence(top) > precedence(op) {
                            break;
                        }
                        operators.pop();
                        reduce(top, &mut operands)?;
                    }
                    operators.push(op);
                }
            },
        }
    }

    while let Some(op) = operators.pop() {
        reduce(op, &mut operands)?;
    }

    Ok(ExpressionTree { root: operands.pop() })
}

/// Relative binding strength of an operator character.
///
/// Smaller values bind tighter: `*` and `/` are 1, `+` and `-` are 2.
/// Parentheses never reach a precedence comparison; the reduce loops stop
/// at `(` before asking.
const fn precedence(op: char) -> u8 {
    match op {
        '*' | '/' => 1,
        '+' | '-' => 2,
        _ => 0,
    }
}

/// Performs one reduction: pops `op`'s two operands off the operand stack
/// and pushes the combined branch node back.
///
/// The right operand is popped first, since it was pushed last.
fn reduce(op: char, operands: &mut Vec<ExprNode>) -> BuildResult<()> {
    let right = operands.pop().ok_or(BuildError::MissingOperand { operator: op })?;
    let left = operands.pop().ok_or(BuildError::MissingOperand { operator: op })?;
    operands.push(ExprNode::branch(op, left, right));
    Ok(())
}
