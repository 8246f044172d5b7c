/// Built-in function implementations.
///
/// Contains `round`, `abs` and the trigonometric functions.
pub mod builtin;
/// The `sqrt` (square root) function implementation.
///
/// Computes a correctly rounded decimal square root.
pub mod sqrt;

pub mod core;
