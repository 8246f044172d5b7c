#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to assign to a constant or function name.
    KeywordTaken {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a name that is neither a constant nor a variable, or called
    /// a name that is not a function.
    UndefinedVariable {
        /// The name that could not be resolved.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand exceeded the bound of `^` or `!`, or a result could not be
    /// represented.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to divide a non-zero value by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operation has no defined result for its operands, such as
    /// `inf - inf` or `sqrt(-1)`.
    InvalidOperation {
        /// Details about the operation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeywordTaken { name, line } => {
                write!(f, "Error on line {line}: Keyword '{name}' is already taken.")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable or function '{name}'.")
            },
            Self::Overflow { line } => {
                write!(f, "Error on line {line}: Overflow while trying to compute result.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InvalidOperation { details, line } => {
                write!(f, "Error on line {line}: Invalid operation: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
