//! # exprtree
//!
//! exprtree is an infix arithmetic expression engine written in Rust.
//! It validates expression strings, builds binary expression trees with a
//! dual-stack shunting-yard variant, renders the infix/prefix/postfix
//! traversals, and evaluates each tree to a numeric result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    engine::{builder, evaluator, render, validator},
    error::EvalError,
};

/// Defines the expression tree data model.
///
/// This module declares the `ExprNode` enum and the `ExpressionTree` value
/// that represent a parsed expression as an owned binary tree. Trees are
/// built by the builder and traversed by the evaluator and the renderer.
///
/// # Responsibilities
/// - Defines the leaf and branch node shapes with exclusive ownership.
/// - Makes the leaf-or-full-internal-node invariant structural.
/// - Provides small constructors for building nodes by hand.
pub mod ast;
/// Orchestrates the stages of expression processing.
///
/// This module ties together lexing, validation, tree building, traversal
/// rendering, and evaluation to provide the complete engine for processing
/// one expression string at a time.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, validator, builder, evaluator,
///   and renderer.
/// - Provides the entry points for each processing stage.
/// - Keeps each stage independent: the renderer and the evaluator consume
///   the same built tree in any order.
pub mod engine;
/// Provides unified error types for every processing stage.
///
/// This module defines all errors that can be raised while validating,
/// building, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including offending
/// characters and byte positions where applicable.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (validator, builder,
///   evaluator).
/// - Attaches positions and detailed messages for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;

/// The outcome of processing a single valid expression.
///
/// The three renderings are always present; the numeric result is kept as
/// its own `Result` so a caller can tell an expression that legitimately
/// evaluates to zero from one that failed to evaluate, and can still print
/// the traversals of an expression that only fails at evaluation time.
#[derive(Debug)]
pub struct ExpressionSummary {
    /// The in-order rendering (infix, without parentheses; display only).
    pub infix:   String,
    /// The pre-order rendering (prefix, Polish notation).
    pub prefix:  String,
    /// The post-order rendering (postfix, reverse Polish notation).
    pub postfix: String,
    /// The numeric result, or the evaluation error.
    pub result:  Result<f64, EvalError>,
}

/// Processes one expression through the full pipeline.
///
/// The expression is validated, built into a tree, rendered in all three
/// traversal orders, and evaluated. Validation and build failures are
/// returned as errors, since the expression has no tree to report on.
/// Evaluation failures are carried inside the summary, because the
/// traversals of the built tree are still meaningful.
///
/// The engine keeps no state between calls: every invocation works on a
/// fresh tree, and a failing expression never affects the next one.
///
/// # Errors
/// Returns an error if validation rejects the expression or the builder
/// cannot assemble a tree from it.
///
/// # Examples
/// ```
/// use exprtree::process_expression;
///
/// let summary = process_expression("2 + 3 * 4").unwrap();
/// assert_eq!(summary.prefix, "+ 2 * 3 4");
/// assert_eq!(summary.result.unwrap(), 14.0);
///
/// // Division by zero fails the evaluation, not the whole pipeline.
/// let summary = process_expression("5 / 0").unwrap();
/// assert_eq!(summary.postfix, "5 0 /");
/// assert!(summary.result.is_err());
///
/// // Invalid syntax is rejected before any tree is built.
/// assert!(process_expression("2 ++ 3").is_err());
/// ```
pub fn process_expression(expr: &str) -> Result<ExpressionSummary, Box<dyn std::error::Error>> {
    validator::validate(expr)?;
    let tree = builder::build(expr)?;

    Ok(ExpressionSummary { infix:   render::render_infix(&tree),
                           prefix:  render::render_prefix(&tree),
                           postfix: render::render_postfix(&tree),
                           result:  evaluator::evaluate(&tree), })
}
