use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{context, strip_trailing_zeros},
};

/// Computes the square root of a value.
///
/// Finite operands use [`decimal_sqrt`]. `sqrt(inf)` is `inf` and NaN passes
/// through.
///
/// # Errors
/// `InvalidOperation` for negative operands, including `-inf`.
///
/// # Example
/// ```
/// use calcparse::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&Value::integer(16), 28, 1).unwrap().to_string(), "4");
/// assert_eq!(sqrt(&Value::integer(2), 28, 1).unwrap().to_string(),
///            "1.414213562373095048801688724");
/// assert!(sqrt(&Value::integer(-1), 28, 1).is_err());
/// ```
pub fn sqrt(arg: &Value, precision: usize, line: usize) -> EvalResult<Value> {
    match arg {
        Value::Finite(d) => {
            decimal_sqrt(d, precision).map(Value::Finite)
                                      .ok_or_else(|| RuntimeError::InvalidOperation { details: format!("square root of negative value {arg}"),
                                                                                      line })
        },
        Value::Infinite { negative: true } => {
            Err(RuntimeError::InvalidOperation { details: "square root of -Infinity".to_string(),
                                                 line })
        },
        Value::Infinite { negative: false } | Value::NaN => Ok(arg.clone()),
    }
}

/// Square root of a decimal, rounded half to even to `precision` digits.
///
/// An exact root is reported with the ideal scale `ceil(scale / 2)`, so
/// `sqrt(0.0100)` is `0.10`; an inexact one keeps every digit of the
/// precision. Negative values have no root.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::{interpreter::evaluator::function::sqrt::decimal_sqrt, util::num::format_decimal};
///
/// let v = BigDecimal::from_str("0.0100").unwrap();
/// assert_eq!(format_decimal(&decimal_sqrt(&v, 28).unwrap()), "0.10");
///
/// assert!(decimal_sqrt(&BigDecimal::from(-4), 28).is_none());
/// ```
#[must_use]
pub fn decimal_sqrt(value: &BigDecimal, precision: usize) -> Option<BigDecimal> {
    let scale = value.fractional_digit_count();
    let ideal_scale = scale.div_euclid(2) + scale.rem_euclid(2);

    if value.is_zero() {
        return Some(value.with_scale(ideal_scale));
    }

    let root = value.sqrt_with_context(&context(precision))?;
    if &(&root * &root) == value {
        Some(strip_trailing_zeros(root, ideal_scale))
    } else {
        Some(root)
    }
}
