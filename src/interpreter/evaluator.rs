/// Binary operator evaluation logic.
///
/// Handles the decimal arithmetic behind `+ - * / % ^`, including the
/// special values and the exponent guard.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and its limits.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Holds the builtin function table and its implementations.
pub mod function;

/// The symbol table.
///
/// One map for constants, functions and variables.
pub mod symbols;
