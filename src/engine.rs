/// The tree builder converts a validated infix expression into a binary
/// expression tree.
///
/// The builder runs the dual-stack variant of the shunting-yard algorithm:
/// an operator stack of characters and an operand stack of owned tree
/// nodes, reduced according to operator precedence so that the finished
/// tree encodes the grouping the infix notation implied.
///
/// # Responsibilities
/// - Scans the token stream once, left to right.
/// - Applies precedence and left-associativity while reducing the stacks.
/// - Produces a fresh, independently owned tree per expression.
pub mod builder;

/// The evaluator computes the numeric result of a built tree.
///
/// Evaluation is a recursive post-order walk: operands are resolved before
/// the operator joining them is applied. The walk never mutates the tree.
///
/// # Responsibilities
/// - Parses leaf literals into numbers, surfacing malformed text.
/// - Applies the four arithmetic operators.
/// - Reports division by zero and unsupported operator characters.
pub mod evaluator;

/// The lexer tokenizes raw expression strings for the other stages.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// numeric literals, the four operators, and parentheses. Whitespace is
/// skipped, and anything outside the expression alphabet surfaces as an
/// error token carrying its span.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Groups contiguous runs of digits and dots into single number tokens.
/// - Exposes unrecognized characters to the validator.
pub mod lexer;

/// The traversal renderer produces the textual orderings of a tree.
///
/// Three pure read-only walks over the same tree render it in in-order
/// (infix), pre-order (prefix), and post-order (postfix) form, with tokens
/// joined by single spaces.
///
/// # Responsibilities
/// - Walks the tree without mutation, any number of times.
/// - Renders each traversal as a space-separated token string.
pub mod render;

/// The validator rejects malformed expressions before any tree is built.
///
/// A single scan over the token stream checks the character alphabet,
/// parenthesis balance, and operator adjacency, and reports the byte
/// position of the first problem found.
///
/// # Responsibilities
/// - Classifies every character of the raw expression.
/// - Tracks parenthesis depth and operator adjacency.
/// - Attaches a position to every diagnostic.
pub mod validator;
