use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::symbols::SymbolTable,
        value::{core::Value, outcome::Outcome},
    },
    util::num::DEFAULT_PRECISION,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on both operands of `^`.
pub const POWER_LIMIT: i64 = 200;
/// Default bound on the operand of `!`.
pub const FACTORIAL_LIMIT: i64 = 50;

/// Bounds that keep evaluation cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Significant digits kept by arithmetic results.
    pub precision:       usize,
    /// Largest allowed base or exponent of `^`.
    pub power_limit:     i64,
    /// Largest allowed operand of `!`.
    pub factorial_limit: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self { precision:       DEFAULT_PRECISION,
               power_limit:     POWER_LIMIT,
               factorial_limit: FACTORIAL_LIMIT, }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table with every
/// constant, builtin function and assigned variable, and the limits that
/// arithmetic runs under.
///
/// ## Usage
///
/// A `Context` lives for one session. Statements are folded into it left to
/// right; assignments update it, expressions only read it.
pub struct Context {
    /// Constants, functions and variables.
    pub symbols: SymbolTable,
    /// Precision and overflow bounds.
    pub limits:  Limits,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the builtin constants and functions and default
    /// limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a context with custom limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { symbols: SymbolTable::new(),
               limits }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right before the operator is applied; a
    /// function argument is evaluated before the function name is resolved.
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2_i64.into(),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Pow,
    ///                             right: Box::new(Expr::Literal { value: 10_i64.into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::integer(1024));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::Finite(value.clone())),
            Expr::Variable { name, line } => self.symbols.lookup_value(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                self.eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { name,
                                 argument,
                                 line, } => {
                let argument = self.eval(argument)?;
                let function = self.symbols.lookup_function(name, *line)?;
                function.call(&argument, self.limits.precision, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side first and only then checks
    /// the target name, so an error in the expression wins over a reserved
    /// name.
    ///
    /// # Returns
    /// The statement's entry for the result log.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Outcome::Value(self.eval(expr)?)),
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.symbols.assign(name, value.clone(), *line)?;
                debug!("assigned {name} = {value}");
                Ok(Outcome::Assignment { name: name.clone(),
                                         value })
            },
        }
    }
}
