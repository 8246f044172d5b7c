//! # calcparse
//!
//! calcparse is an arbitrary-precision decimal calculator written in Rust.
//! It lexes, parses and evaluates small arithmetic programs with variables,
//! named constants (`pi`, `e`, `tau`, `inf`, `nan`) and unary functions
//! (`round`, `sin`, `cos`, `tan`, `sqrt`, `abs`).
//!
//! ```
//! let outcomes = calcparse::evaluate("x = 5\nx ^ 2 + 1 / 4").unwrap();
//!
//! assert_eq!(outcomes[0].to_string(), "x = 5");
//! assert_eq!(outcomes[1].to_string(), "25.25");
//! ```

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

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a source as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating a source, each carrying the line it occurred on, and the
/// [`error::ErrorKind`] taxonomy callers match on.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and exposes [`interpreter::session::Session`] as the
/// stateful entry point.
pub mod interpreter;
/// General utilities: decimal arithmetic helpers and the bracket checker.
pub mod util;

pub use error::{CalcError, ErrorKind};
pub use interpreter::{
    evaluator::core::Limits,
    session::Session,
    value::{core::Value, outcome::Outcome},
};

/// Evaluates `source` in a fresh session and returns one outcome per
/// statement.
///
/// # Errors
/// The first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use calcparse::{ErrorKind, evaluate};
///
/// let outcomes = evaluate("2 ^ 10").unwrap();
/// assert_eq!(outcomes[0].to_string(), "1024");
///
/// let err = evaluate("y + 1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UndefinedReference);
/// ```
pub fn evaluate(source: &str) -> Result<Vec<Outcome>, CalcError> {
    Session::new().evaluate(source)
}
