/// Core value type and conversions.
///
/// Defines the `Value` enum, a decimal number extended with infinities and
/// NaN, together with its formatting and `f64` bridges.
pub mod core;
/// Result-log entries.
///
/// Defines `Outcome`, one entry per evaluated statement.
pub mod outcome;
