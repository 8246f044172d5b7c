use crate::interpreter::value::core::Value;

/// The result of one statement.
///
/// Expression statements yield their value; assignments echo the binding,
/// displayed as `name = value`.
///
/// ## Example
/// ```
/// use calcparse::interpreter::value::{core::Value, outcome::Outcome};
///
/// let echo = Outcome::Assignment { name:  "x".to_string(),
///                                  value: Value::integer(5), };
/// assert_eq!(echo.to_string(), "x = 5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value of an expression statement.
    Value(Value),
    /// A stored assignment.
    Assignment {
        /// The variable assigned to.
        name:  String,
        /// The value stored.
        value: Value,
    },
}

impl Outcome {
    /// The value produced by the statement, for either variant.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Value(value) | Self::Assignment { value, .. } => value,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
        }
    }
}
