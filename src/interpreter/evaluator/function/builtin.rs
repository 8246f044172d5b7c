use bigdecimal::RoundingMode;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a trigonometric function through `f64`.
///
/// The argument is converted to the nearest `f64` and the result back to the
/// decimal it represents exactly. NaN passes through; an argument that is
/// infinite, or too large for an `f64`, has no defined result.
///
/// # Example
/// ```
/// use calcparse::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let r = sin(&Value::integer(0), 28, 1).unwrap();
/// assert_eq!(r, Value::integer(0));
/// ```
macro_rules! float_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(arg: &Value, _precision: usize, line: usize) -> EvalResult<Value> {
            match arg {
                Value::Finite(_) => match arg.to_f64() {
                    Some(x) if x.is_finite() => Ok(Value::from_f64(x.$real_fn())),
                    _ => Err(RuntimeError::InvalidOperation { details: format!("{} of {arg} is out of range",
                                                                                  stringify!($fname)),
                                                                 line }),
                },
                Value::Infinite { .. } => {
                    Err(RuntimeError::InvalidOperation { details: format!("{} of an infinite value",
                                                                          stringify!($fname)),
                                                         line })
                },
                Value::NaN => Ok(Value::NaN),
            }
        }
    };
}

float_builtin!(sin, sin);
float_builtin!(cos, cos);
float_builtin!(tan, tan);

/// Rounds to the nearest integer, ties to even.
///
/// # Errors
/// `Overflow` for infinities, `InvalidOperation` for NaN.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// let half = Value::Finite(BigDecimal::from_str("2.5").unwrap());
/// assert_eq!(round(&half, 28, 1).unwrap(), Value::integer(2));
///
/// let above = Value::Finite(BigDecimal::from_str("-3.7").unwrap());
/// assert_eq!(round(&above, 28, 1).unwrap(), Value::integer(-4));
/// ```
pub fn round(arg: &Value, _precision: usize, line: usize) -> EvalResult<Value> {
    match arg {
        Value::Finite(d) => Ok(Value::Finite(d.with_scale_round(0, RoundingMode::HalfEven))),
        Value::Infinite { .. } => Err(RuntimeError::Overflow { line }),
        Value::NaN => Err(RuntimeError::InvalidOperation { details: "cannot round NaN".to_string(),
                                                           line }),
    }
}

/// Returns the absolute value, keeping the scale.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// let v = Value::Finite(BigDecimal::from_str("-3.50").unwrap());
/// assert_eq!(abs(&v, 28, 1).unwrap().to_string(), "3.50");
/// ```
pub fn abs(arg: &Value, _precision: usize, _line: usize) -> EvalResult<Value> {
    Ok(match arg {
           Value::Finite(d) => Value::Finite(d.abs()),
           Value::Infinite { .. } => Value::Infinite { negative: false },
           Value::NaN => Value::NaN,
       })
}
