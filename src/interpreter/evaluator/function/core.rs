use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        function::{builtin, sqrt},
    },
    value::core::Value,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated argument, the precision of the session and
/// the line number.
type BuiltinFn = fn(&Value, usize, usize) -> EvalResult<Value>;

/// A builtin unary function.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the function is called by.
    pub name: &'static str,
    func:     BuiltinFn,
}

impl Builtin {
    /// Applies the function to `argument`.
    ///
    /// # Example
    /// ```
    /// use calcparse::interpreter::{evaluator::function::core::BUILTIN_TABLE, value::core::Value};
    ///
    /// let abs = BUILTIN_TABLE.iter().find(|b| b.name == "abs").unwrap();
    /// assert_eq!(abs.call(&Value::integer(-3), 28, 1).unwrap(), Value::integer(3));
    /// ```
    pub fn call(&self, argument: &Value, precision: usize, line: usize) -> EvalResult<Value> {
        (self.func)(argument, precision, line)
    }
}

/// Defines builtin functions by generating the `BUILTIN_TABLE` lookup table.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "round" => builtin::round,
    "sin"   => builtin::sin,
    "cos"   => builtin::cos,
    "tan"   => builtin::tan,
    "sqrt"  => sqrt::sqrt,
    "abs"   => builtin::abs,
}
