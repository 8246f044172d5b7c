use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{EMAX, adjusted_exponent, context, divide, etiny, fit_precision, ln, underflow_zero},
};

/// Extra digits carried through repeated squaring and through `exp(y·ln x)`.
const GUARD_DIGITS: usize = 10;

/// Once an intermediate power is this far from one, the final result is
/// certain to leave the exponent range.
const ESCAPE_EXPONENT: i64 = 2 * (EMAX + 1);

/// `Some(true)` when `value` has grown past the escape exponent,
/// `Some(false)` when it has shrunk past it.
fn escaped(value: &BigDecimal) -> Option<bool> {
    if value.is_zero() {
        return None;
    }
    let adjusted = adjusted_exponent(value);
    (adjusted.abs() > ESCAPE_EXPONENT).then_some(adjusted > 0)
}

fn no_real_result(base: &Value, exponent: &Value, line: usize) -> RuntimeError {
    RuntimeError::InvalidOperation { details: format!("{base} ^ {exponent} has no real result"),
                                     line }
}

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Either operand above the power limit is an overflow; the exponent is
    /// only compared when the base is within bounds. Integral exponents are
    /// computed by repeated squaring, negative ones through the reciprocal.
    /// Other finite exponents use `exp(y · ln x)`. Only infinite operands go
    /// through `f64`.
    ///
    /// # Errors
    /// - `Overflow` when an operand exceeds the power limit or the result
    ///   exceeds the exponent range.
    /// - `InvalidOperation` for `0 ^ 0`, for a negative base with a
    ///   non-integral exponent and when comparing NaN against the limit.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use calcparse::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    ///
    /// let result = context.eval_pow(&Value::integer(2), &Value::integer(10), 1).unwrap();
    /// assert_eq!(result, Value::integer(1024));
    ///
    /// let half = Value::Finite(BigDecimal::from_str("0.5").unwrap());
    /// let root = context.eval_pow(&Value::integer(2), &half, 1).unwrap();
    /// assert_eq!(root.to_string(), "1.414213562373095048801688724");
    ///
    /// let err = context.eval_pow(&Value::integer(2), &Value::integer(201), 1).unwrap_err();
    /// assert_eq!(err, RuntimeError::Overflow { line: 1 });
    /// ```
    pub fn eval_pow(&self, base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        let limit = self.limits.power_limit;
        if base.exceeds(limit, line)? || exponent.exceeds(limit, line)? {
            return Err(RuntimeError::Overflow { line });
        }

        let negative_base = match base {
            Value::Finite(b) => b.is_negative(),
            Value::Infinite { negative } => *negative,
            Value::NaN => false,
        };

        match (base, exponent) {
            (Value::Finite(b), Value::Finite(e)) if e.is_integer() => {
                let (n, _) = e.with_scale(0).into_bigint_and_exponent();
                self.integer_pow(b, &n, line)
            },
            (_, Value::Finite(e)) if negative_base && !e.is_integer() => {
                Err(no_real_result(base, exponent, line))
            },
            (_, Value::Infinite { .. }) if negative_base => Err(no_real_result(base, exponent, line)),
            (Value::Finite(b), Value::Finite(e)) => self.fractional_pow(b, e, line),
            _ => Self::float_pow(base, exponent, line),
        }
    }

    /// `base ^ n` for an integral `n`.
    ///
    /// Squaring stops as soon as an intermediate power is far enough from one
    /// that the result can only overflow or underflow.
    fn integer_pow(&self, base: &BigDecimal, n: &BigInt, line: usize) -> EvalResult<Value> {
        let precision = self.limits.precision;

        if n.is_zero() {
            if base.is_zero() {
                return Err(RuntimeError::InvalidOperation { details: "0 ^ 0".to_string(),
                                                            line });
            }
            return Ok(Value::integer(1));
        }
        let negative = n.is_negative();
        if base.is_zero() && negative {
            return Ok(Value::Infinite { negative: false });
        }

        let working = precision + GUARD_DIGITS;
        let mut magnitude = n.magnitude().clone();
        if base.abs().is_one() && magnitude.bits() > 64 {
            // Only the parity is left to matter.
            let parity = u64::from(magnitude.bit(0));
            magnitude = BigUint::from(2 * working as u64 + parity);
        }
        let mut square = base.clone();
        let mut result = BigDecimal::one();

        for bit in 0..magnitude.bits() {
            if bit > 0 {
                square = fit_precision(&square * &square, working);
            }
            if magnitude.bit(bit) {
                result = fit_precision(&result * &square, working);
            }
            if let Some(large) = escaped(&square).or_else(|| escaped(&result)) {
                return if large == negative {
                    Ok(Value::Finite(underflow_zero(precision)))
                } else {
                    Err(RuntimeError::Overflow { line })
                };
            }
        }

        if negative {
            Ok(Value::Finite(divide(&BigDecimal::one(), &result, precision)))
        } else {
            Ok(Value::Finite(fit_precision(result, precision)))
        }
    }

    /// `base ^ exponent` for a non-negative base and a non-integral exponent,
    /// computed as `exp(exponent · ln base)`.
    ///
    /// The result always carries the full precision, so `4 ^ 0.5` is
    /// `2.000000000000000000000000000`.
    fn fractional_pow(&self, base: &BigDecimal, exponent: &BigDecimal, line: usize) -> EvalResult<Value> {
        let precision = self.limits.precision;

        if base.is_zero() {
            return Ok(if exponent.is_negative() {
                          Value::Infinite { negative: false }
                      } else {
                          Value::integer(0)
                      });
        }

        let working = precision + 2 * GUARD_DIGITS;
        let power = fit_precision(ln(base, working) * exponent, working);

        // Decide overflow and underflow before exp builds the number.
        let decades = divide(&power, &ln(&BigDecimal::from(10), working), GUARD_DIGITS);
        if decades > BigDecimal::from(EMAX + 1) {
            return Err(RuntimeError::Overflow { line });
        }
        if decades < BigDecimal::from(etiny(precision) - 1) {
            return Ok(Value::Finite(underflow_zero(precision)));
        }

        let result = power.exp_with_context(&context(working));
        Ok(Value::Finite(context(precision).round_decimal(result)))
    }

    /// Power through `f64`, for infinite operands.
    fn float_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        let (Some(x), Some(y)) = (base.to_f64(), exponent.to_f64()) else {
            return Err(RuntimeError::InvalidOperation { details: format!("{base} ^ {exponent} is out of range"),
                                                        line });
        };
        let result = x.powf(y);
        if result.is_nan() {
            return Err(RuntimeError::InvalidOperation { details: format!("{base} ^ {exponent} is undefined"),
                                                        line });
        }
        Ok(Value::from_f64(result))
    }
}
