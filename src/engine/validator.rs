use logos::Logos;

use crate::{
    engine::lexer::{Token, operator_char},
    error::ValidationError,
};

/// Checks an expression string for syntax errors before any tree is built.
///
/// The scan runs once, left to right, over the token stream and checks
/// three things: every character belongs to the expression alphabet,
/// parentheses are balanced, and no two operators meet without an operand
/// between them. Whitespace is skipped. At the end of the scan the
/// parenthesis depth must be back to zero and the expression must not end
/// on an operator, checked in that order.
///
/// The pass deliberately does not verify numeric-literal well-formedness
/// (`1.2.3` is accepted) and does not require `(` to open a valid
/// sub-expression (`()` and `2(3+4)` are accepted); those inputs are left
/// for later stages to deal with.
///
/// # Parameters
/// - `expr`: The raw expression string.
///
/// # Returns
/// `Ok(())` when the expression may be handed to the builder.
///
/// # Errors
/// - `InvalidCharacter` for a character outside digits, `.`, `+ - * /`,
///   parentheses, and whitespace.
/// - `UnbalancedParentheses` for a `)` without a partner, or for an
///   unclosed `(` at the end of the scan.
/// - `ConsecutiveOperators` for two operators with nothing between them.
/// - `TrailingOperator` when the last significant character is an operator.
///
/// # Example
/// ```
/// use exprtree::{engine::validator::validate, error::ValidationError};
///
/// assert!(validate("(2 + 3) * 4").is_ok());
///
/// let err = validate("2 # 3").unwrap_err();
/// assert!(matches!(err, ValidationError::InvalidCharacter { character: '#', position: 2 }));
/// ```
pub fn validate(expr: &str) -> Result<(), ValidationError> {
    let mut depth = 0usize;
    let mut last_was_operator = false;
    let mut last_operator_position = 0;

    let mut lexer = Token::lexer(expr);
    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        let Ok(token) = token else {
            // An error token always covers at least one character.
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ValidationError::InvalidCharacter { character, position });
        };

        match token {
            Token::LParen => {
                depth += 1;
                last_was_operator = false;
            },

            Token::RParen => {
                if depth == 0 {
                    return Err(ValidationError::UnbalancedParentheses { position });
                }
                depth -= 1;
                last_was_operator = false;
            },

            other => {
                if operator_char(&other).is_some() {
                    if last_was_operator {
                        return Err(ValidationError::ConsecutiveOperators { position });
                    }
                    last_was_operator = true;
                    last_operator_position = position;
                } else {
                    last_was_operator = false;
                }
            },
        }
    }

    if depth != 0 {
        return Err(ValidationError::UnbalancedParentheses { position: expr.len() });
    }
    if last_was_operator {
        return Err(ValidationError::TrailingOperator { position: last_operator_position });
    }

    Ok(())
}
