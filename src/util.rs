/// Decimal helpers.
///
/// Rounding through a half-even `bigdecimal::Context`, the exponent range,
/// exact division with the ideal scale, the natural logarithm and the
/// to-scientific-string formatting used to display results.
pub mod num;
/// Bracket balance checking.
///
/// A standalone validator over `( { [` that can run before full parsing.
pub mod brackets;
