use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to the scalar handlers and `^` to
    /// `eval_pow`, all under the context's limits. Every result is then held
    /// to the exponent range: too large is an overflow, too small loses
    /// digits down to zero.
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let left = Value::integer(3);
    /// let right = Value::integer(4);
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::integer(7));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        let precision = self.limits.precision;

        let result = match op {
            BinaryOperator::Add => Self::eval_add(left, right, precision, line),
            BinaryOperator::Sub => Self::eval_sub(left, right, precision, line),
            BinaryOperator::Mul => Self::eval_mul(left, right, precision, line),
            BinaryOperator::Div => Self::eval_div(left, right, precision, line),
            BinaryOperator::Mod => Self::eval_rem(left, right, precision, line),
            BinaryOperator::Pow => self.eval_pow(left, right, line),
        }?;

        result.within_range(precision, line)
    }
}
