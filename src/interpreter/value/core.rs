use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{fit_exponent, format_decimal},
};

/// Represents a runtime value.
///
/// Every literal, constant, variable and intermediate result is a `Value`.
/// Finite values are arbitrary-precision decimals; `inf` and `nan` need the
/// two special variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A finite decimal.
    Finite(BigDecimal),
    /// Positive or negative infinity.
    Infinite {
        /// Whether this is `-Infinity`.
        negative: bool,
    },
    /// Not a number.
    NaN,
}

impl Value {
    /// Creates an integral value.
    ///
    /// ## Example
    /// ```
    /// use calcparse::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::integer(42).to_string(), "42");
    /// ```
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::Finite(BigDecimal::new(BigInt::from(n), 0))
    }

    /// Creates a value holding exactly the number `x` represents.
    ///
    /// ## Example
    /// ```
    /// use calcparse::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_f64(120.0).to_string(), "120");
    /// assert_eq!(Value::from_f64(0.1).to_string(),
    ///            "0.1000000000000000055511151231257827021181583404541015625");
    /// assert_eq!(Value::from_f64(f64::NEG_INFINITY), Value::Infinite { negative: true });
    /// assert_eq!(Value::from_f64(f64::NAN), Value::NaN);
    /// ```
    #[must_use]
    pub fn from_f64(x: f64) -> Self {
        match BigDecimal::try_from(x) {
            // Subnormals come back with all 1074 fractional digits.
            Ok(d) if x.is_subnormal() => Self::Finite(d.normalized()),
            Ok(d) => Self::Finite(d),
            Err(_) if x.is_infinite() => Self::Infinite { negative: x < 0.0 },
            Err(_) => Self::NaN,
        }
    }

    /// Returns the nearest `f64`, or `None` when a finite value has none.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Finite(d) => d.to_f64(),
            Self::Infinite { negative: true } => Some(f64::NEG_INFINITY),
            Self::Infinite { negative: false } => Some(f64::INFINITY),
            Self::NaN => Some(f64::NAN),
        }
    }

    /// Keeps a finite result inside the exponent range.
    ///
    /// # Errors
    /// `Overflow` when the adjusted exponent is above the maximum.
    ///
    /// ## Example
    /// ```
    /// use std::str::FromStr;
    ///
    /// use bigdecimal::BigDecimal;
    /// use calcparse::interpreter::value::core::Value;
    ///
    /// let huge = Value::Finite(BigDecimal::from_str("1e1000000").unwrap());
    /// assert!(huge.within_range(28, 1).is_err());
    /// assert!(Value::integer(7).within_range(28, 1).is_ok());
    /// ```
    pub fn within_range(self, precision: usize, line: usize) -> EvalResult<Self> {
        match self {
            Self::Finite(d) => fit_exponent(d, precision).map(Self::Finite)
                                                         .ok_or(RuntimeError::Overflow { line }),
            other => Ok(other),
        }
    }

    /// Tests `self > limit`.
    ///
    /// Ordering a NaN is an invalid operation rather than `false`.
    ///
    /// ## Example
    /// ```
    /// use calcparse::interpreter::value::core::Value;
    ///
    /// assert!(Value::integer(201).exceeds(200, 1).unwrap());
    /// assert!(!Value::integer(200).exceeds(200, 1).unwrap());
    /// assert!(Value::Infinite { negative: false }.exceeds(200, 1).unwrap());
    /// assert!(Value::NaN.exceeds(200, 1).is_err());
    /// ```
    pub fn exceeds(&self, limit: i64, line: usize) -> EvalResult<bool> {
        match self {
            Self::Finite(d) => Ok(d.cmp(&BigDecimal::new(BigInt::from(limit), 0)) == Ordering::Greater),
            Self::Infinite { negative } => Ok(!negative),
            Self::NaN => Err(RuntimeError::InvalidOperation { details: "cannot order NaN".to_string(),
                                                              line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", format_decimal(d)),
            Self::Infinite { negative: false } => write!(f, "Infinity"),
            Self::Infinite { negative: true } => write!(f, "-Infinity"),
            Self::NaN => write!(f, "NaN"),
        }
    }
}
