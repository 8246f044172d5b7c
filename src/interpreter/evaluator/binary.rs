/// Operator dispatch.
pub mod core;
/// Exponentiation and its operand guard.
pub mod power;
/// Addition, subtraction, multiplication, division and remainder.
pub mod scalar;
