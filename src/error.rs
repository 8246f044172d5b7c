/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, unexpected tokens and premature end of
/// input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reserved-name assignments, unresolved names and overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character.
    Lexical,
    /// Token sequence does not match the grammar.
    Syntax,
    /// Assignment target is a constant or function name.
    KeywordConflict,
    /// Name not found.
    UndefinedReference,
    /// Operand outside the bound of `^` or `!`.
    Overflow,
    /// Non-zero value divided by zero.
    DivisionByZero,
    /// Operation undefined for its operands.
    InvalidOperation,
}

/// Any error produced while evaluating a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Lexing or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     error::{CalcError, ErrorKind, RuntimeError},
    /// };
    ///
    /// let err = CalcError::from(RuntimeError::Overflow { line: 1 });
    /// assert_eq!(err.kind(), ErrorKind::Overflow);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnexpectedCharacter { .. }) => ErrorKind::Lexical,
            Self::Parse(ParseError::UnexpectedToken { .. } | ParseError::UnexpectedEndOfInput { .. }) => {
                ErrorKind::Syntax
            },
            Self::Runtime(RuntimeError::KeywordTaken { .. }) => ErrorKind::KeywordConflict,
            Self::Runtime(RuntimeError::UndefinedVariable { .. }) => ErrorKind::UndefinedReference,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::InvalidOperation { .. }) => ErrorKind::InvalidOperation,
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
