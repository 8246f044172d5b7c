use log::{debug, trace};

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::core::{Context, Limits},
        lexer::{Token, Tokenized, tokenize},
        parser::statement::parse_statement,
        value::{core::Value, outcome::Outcome},
    },
};

/// One evaluator instance: the variables and the result log of a caller.
///
/// Sources are evaluated statement by statement. A failing statement stops
/// evaluation, but everything before it stays in effect.
///
/// # Example
/// ```
/// use calcparse::interpreter::{session::Session, value::core::Value};
///
/// let mut session = Session::new();
///
/// session.evaluate("x = 5").unwrap();
/// let outcomes = session.evaluate("x + 1").unwrap();
///
/// assert_eq!(outcomes[0].to_string(), "6");
/// assert_eq!(session.variable("x"), Some(&Value::integer(5)));
/// assert_eq!(session.results().len(), 2);
/// ```
#[derive(Default)]
pub struct Session {
    context: Context,
    results: Vec<Outcome>,
}

impl Session {
    /// Creates a session with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with custom precision and overflow bounds.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { context: Context::with_limits(limits),
               results: Vec::new(), }
    }

    /// Every outcome produced so far, oldest first.
    #[must_use]
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// The current value of a variable, if it was assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.context.symbols.variable(name)
    }

    /// Evaluates every statement of `source` and returns their outcomes.
    ///
    /// Statements are separated by single newlines. Each statement is parsed
    /// in full before it is evaluated, and the next one is only parsed once
    /// the previous one succeeded. A blank line, a leading newline or a
    /// trailing newline is a syntax error, as is empty input.
    ///
    /// A character the lexer does not recognize is reported when the parser
    /// reaches it, so statements completed before it still run.
    ///
    /// # Errors
    /// The first lexical, syntax or runtime error. Outcomes of the statements
    /// before it remain in [`Session::results`].
    ///
    /// # Example
    /// ```
    /// use calcparse::{
    ///     error::{CalcError, ParseError},
    ///     interpreter::session::Session,
    /// };
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.evaluate("1\n2").unwrap().len(), 2);
    ///
    /// let err = session.evaluate("1\n\n2").unwrap_err();
    /// assert_eq!(err,
    ///            CalcError::Parse(ParseError::UnexpectedToken { token: "newline".to_string(),
    ///                                                           line:  2, }));
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Vec<Outcome>, CalcError> {
        debug!("evaluating {} line(s)", source.lines().count());

        let Tokenized { tokens, error } = tokenize(source);
        let lexical = error.map(|(token, line)| ParseError::UnexpectedCharacter { token, line });
        let last_line = tokens.last().map_or(1, |(_, line)| *line);

        let mut iter = tokens.iter().peekable();
        let mut outcomes = Vec::new();

        loop {
            let statement = match parse_statement(&mut iter, last_line) {
                Ok(statement) => statement,
                Err(e @ ParseError::UnexpectedEndOfInput { .. }) => {
                    return Err(lexical.unwrap_or(e).into());
                },
                Err(e) => return Err(e.into()),
            };

            let more = match iter.next() {
                Some((Token::NewLine, _)) => true,
                Some((tok, line)) => {
                    return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                             line:  *line, }.into());
                },
                None => {
                    if let Some(e) = lexical {
                        return Err(e.into());
                    }
                    false
                },
            };

            trace!("parsed {statement:?}");
            let outcome = self.context.eval_statement(&statement)?;
            self.results.push(outcome.clone());
            outcomes.push(outcome);

            if !more {
                return Ok(outcomes);
            }
        }
    }
}
