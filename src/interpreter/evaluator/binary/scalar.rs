use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{adjusted_exponent, divide, fit_precision},
};

fn invalid(details: &str, line: usize) -> RuntimeError {
    RuntimeError::InvalidOperation { details: details.to_string(),
                                     line }
}

impl Context {
    /// Adds two values, rounding the sum to `precision` digits.
    ///
    /// NaN is absorbing; infinities of opposite sign cancel into an error.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use calcparse::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let a = Value::Finite(BigDecimal::from_str("0.1").unwrap());
    /// let b = Value::Finite(BigDecimal::from_str("0.2").unwrap());
    ///
    /// let sum = Context::eval_add(&a, &b, 28, 1).unwrap();
    /// assert_eq!(sum.to_string(), "0.3");
    /// ```
    pub fn eval_add(left: &Value, right: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        use Value::{Finite, Infinite, NaN};

        match (left, right) {
            (NaN, _) | (_, NaN) => Ok(NaN),
            (Infinite { negative: a }, Infinite { negative: b }) => {
                if a == b {
                    Ok(left.clone())
                } else {
                    Err(invalid("Infinity - Infinity", line))
                }
            },
            (Infinite { .. }, _) => Ok(left.clone()),
            (_, Infinite { .. }) => Ok(right.clone()),
            (Finite(a), Finite(b)) => Ok(Finite(fit_precision(a + b, precision))),
        }
    }

    /// Subtracts `right` from `left`.
    pub fn eval_sub(left: &Value, right: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        Self::eval_add(left, &Self::negate(right), precision, line)
    }

    /// Multiplies two values, rounding the product to `precision` digits.
    pub fn eval_mul(left: &Value, right: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        use Value::{Finite, Infinite, NaN};

        match (left, right) {
            (NaN, _) | (_, NaN) => Ok(NaN),
            (Infinite { negative: a }, Infinite { negative: b }) => {
                Ok(Infinite { negative: a != b })
            },
            (Infinite { negative }, Finite(d)) | (Finite(d), Infinite { negative }) => {
                if d.is_zero() {
                    Err(invalid("0 * Infinity", line))
                } else {
                    Ok(Infinite { negative: *negative != d.is_negative() })
                }
            },
            (Finite(a), Finite(b)) => Ok(Finite(fit_precision(a * b, precision))),
        }
    }

    /// Divides `left` by `right`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a non-zero dividend and a zero divisor.
    /// - `InvalidOperation` for `0 / 0` and `Infinity / Infinity`.
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let third = Context::eval_div(&Value::integer(1), &Value::integer(3), 28, 1).unwrap();
    /// assert_eq!(third.to_string(), "0.3333333333333333333333333333");
    ///
    /// let err = Context::eval_div(&Value::integer(1), &Value::integer(0), 28, 4).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { line: 4 });
    /// ```
    pub fn eval_div(left: &Value, right: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        use Value::{Finite, Infinite, NaN};

        match (left, right) {
            (NaN, _) | (_, NaN) => Ok(NaN),
            (Infinite { .. }, Infinite { .. }) => Err(invalid("Infinity / Infinity", line)),
            (Infinite { negative }, Finite(d)) => {
                Ok(Infinite { negative: *negative != d.is_negative() })
            },
            (Finite(_), Infinite { .. }) => Ok(Value::integer(0)),
            (Finite(a), Finite(b)) => {
                if b.is_zero() {
                    if a.is_zero() {
                        Err(invalid("0 / 0", line))
                    } else {
                        Err(RuntimeError::DivisionByZero { line })
                    }
                } else {
                    Ok(Finite(divide(a, b, precision)))
                }
            },
        }
    }

    /// Truncated remainder of `left / right`, carrying the sign of `left`.
    ///
    /// The integer quotient behind the remainder must fit in `precision`
    /// digits.
    ///
    /// # Errors
    /// `InvalidOperation` for a zero divisor, an infinite dividend and a
    /// quotient too large for the precision.
    ///
    /// # Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use calcparse::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let a = Value::Finite(BigDecimal::from_str("-7.5").unwrap());
    /// let rem = Context::eval_rem(&a, &Value::integer(2), 28, 1).unwrap();
    /// assert_eq!(rem.to_string(), "-1.5");
    ///
    /// let wide = Value::Finite(BigDecimal::from_str("1e40").unwrap());
    /// assert!(Context::eval_rem(&wide, &Value::integer(3), 28, 1).is_err());
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    pub fn eval_rem(left: &Value, right: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        use Value::{Finite, Infinite, NaN};

        match (left, right) {
            (NaN, _) | (_, NaN) => Ok(NaN),
            (Infinite { .. }, _) => Err(invalid("Infinity % x", line)),
            (Finite(_), Infinite { .. }) => Ok(left.clone()),
            (Finite(a), Finite(b)) => {
                if b.is_zero() {
                    return Err(invalid("x % 0", line));
                }
                let digits = precision as i64;
                if !a.is_zero() && adjusted_exponent(a) - adjusted_exponent(b) > digits {
                    return Err(invalid("quotient too large for %", line));
                }

                let rem = a % b;
                let quotient_bound = b.abs() * BigDecimal::new(BigInt::one(), -digits);
                if (a - &rem).abs() >= quotient_bound {
                    return Err(invalid("quotient too large for %", line));
                }
                Ok(Finite(fit_precision(rem, precision)))
            },
        }
    }
}
