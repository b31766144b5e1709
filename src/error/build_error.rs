#[derive(Debug)]
/// Represents all errors that can occur while assembling an expression tree.
///
/// The builder requires input that already passed validation; these errors
/// define its behavior when that precondition is broken, which is reachable
/// through the validator's known acceptance gaps (for example, a leading
/// operator such as `+2`).
pub enum BuildError {
    /// An operator had fewer than two operands left on the operand stack.
    MissingOperand {
        /// The operator that was being reduced.
        operator: char,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator } => write!(f,
                                                        "Error while building tree: Operator '{operator}' is missing an operand."),
        }
    }
}

impl std::error::Error for BuildError {}
