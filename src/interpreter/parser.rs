/// Entry point of expression parsing.
///
/// Holds the shared result type and the lowest-precedence rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative levels: additive, multiplicative and
/// exponentiation.
pub mod binary;

/// Unary, postfix and primary parsing.
///
/// Handles prefix negation, postfix factorials, literals, names, function
/// calls and parenthesized groups.
pub mod unary;

/// Statement parsing.
///
/// Distinguishes assignments from bare expressions.
pub mod statement;

/// Small helpers shared by the parsing rules.
pub mod utils;
