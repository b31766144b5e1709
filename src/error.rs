/// Validation errors.
///
/// Defines all error types that can occur while scanning a raw expression
/// string before any tree is built. Validation errors cover stray
/// characters, parenthesis imbalance, and operator adjacency mistakes, each
/// reported with the byte position of the offending spot.
pub mod validation_error;

/// Tree-building errors.
///
/// Contains the error types that can be raised while assembling a binary
/// expression tree from the operand stack. These only occur when the
/// builder's validated-input precondition is broken.
pub mod build_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the numeric
/// result of a built tree: malformed numeric literals, division by zero,
/// and unsupported operator characters.
pub mod eval_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;
pub use validation_error::ValidationError;
