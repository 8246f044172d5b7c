use bigdecimal::BigDecimal;
use num_traits::One;

use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{GammaError, euler_gamma},
        },
        value::core::Value,
    },
    util::num::fit_precision,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    ///
    /// let v = context.eval_unary(UnaryOperator::Negate, &Value::integer(5), 1).unwrap();
    /// assert_eq!(v, Value::integer(-5));
    ///
    /// let v = context.eval_unary(UnaryOperator::Factorial, &Value::integer(5), 1).unwrap();
    /// assert_eq!(v, Value::integer(120));
    /// ```
    pub fn eval_unary(&self, op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Self::negate(value)),
            UnaryOperator::Factorial => self.eval_factorial(value, line),
        }
    }

    /// Arithmetic negation.
    #[must_use]
    pub fn negate(value: &Value) -> Value {
        match value {
            Value::Finite(d) => Value::Finite(-d),
            Value::Infinite { negative } => Value::Infinite { negative: !negative },
            Value::NaN => Value::NaN,
        }
    }

    /// Computes `x!` as `Γ(x + 1)`.
    ///
    /// `x + 1` is rounded to the context precision and converted to the
    /// nearest `f64`; the gamma result is then taken back exactly, without
    /// rounding. Integers up to `22!` are exact; larger ones show the `f64`
    /// rounding, so `25!` is `15511210043330979612852224`.
    ///
    /// # Errors
    /// - `Overflow` when the operand exceeds the factorial limit, or when the
    ///   result does not fit in an `f64`.
    /// - `InvalidOperation` for negative integers, where `Γ` has poles, and
    ///   for `-inf`.
    pub fn eval_factorial(&self, value: &Value, line: usize) -> EvalResult<Value> {
        if value.exceeds(self.limits.factorial_limit, line)? {
            return Err(RuntimeError::Overflow { line });
        }

        let shifted = match value {
            Value::Finite(d) => Value::Finite(fit_precision(d + BigDecimal::one(), self.limits.precision)),
            other => other.clone(),
        };
        let x = shifted.to_f64()
                       .ok_or_else(|| RuntimeError::InvalidOperation { details: format!("{value} has no float value"),
                                                                       line })?;

        match euler_gamma(x) {
            Ok(gamma) => Ok(Value::from_f64(gamma)),
            Err(GammaError::Pole) => {
                Err(RuntimeError::InvalidOperation { details: format!("factorial of {value} is undefined"),
                                                     line })
            },
            Err(GammaError::Overflow) => Err(RuntimeError::Overflow { line }),
        }
    }
}
