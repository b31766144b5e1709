#[derive(Debug)]
/// Represents all errors that can occur while evaluating a built tree.
///
/// Evaluation errors are local to the failing expression: the engine holds
/// no state between expressions, so a caller is free to report the error
/// and continue with the next input.
pub enum EvalError {
    /// A leaf literal could not be parsed as a number.
    ///
    /// Validation accepts any contiguous run of digits and dots, so a
    /// malformed literal such as `1.2.3` only surfaces here.
    MalformedNumber {
        /// The literal text that failed to parse.
        literal: String,
    },
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// A branch node carried an operator outside `+ - * /`.
    UnsupportedOperator {
        /// The operator character.
        operator: char,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { literal } => write!(f,
                                                        "Error during evaluation: Malformed numeric literal '{literal}'."),

            Self::DivisionByZero => write!(f, "Error during evaluation: Division by zero."),

            Self::UnsupportedOperator { operator } => write!(f,
                                                             "Error during evaluation: Unsupported operator '{operator}'."),
        }
    }
}

impl std::error::Error for EvalError {}
