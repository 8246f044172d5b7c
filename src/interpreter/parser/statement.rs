use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment (`NAME = expression`) or a bare
/// expression. The statement's source line is taken from its first token.
///
/// Whether the name may be assigned is decided at evaluation time, so
/// `pi = 3` parses.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `end_line`: Line reported when the tokens run out.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Example
/// ```
/// use calcparse::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let lexed = tokenize("x = 2 * 3");
/// let statement = parse_statement(&mut lexed.tokens.iter().peekable(), 1).unwrap();
/// assert!(matches!(statement, Statement::Assignment { ref name, line: 1, .. } if name == "x"));
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens, end_line)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(end_line, |(_, l)| *l);
    let expr = parse_expression(tokens, end_line)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses an assignment of the form `<name> = <expression>`.
///
/// Looks one token past the name; if no `=` follows, nothing is consumed and
/// `Ok(None)` is returned.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           end_line: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Name(name), line)) = tokens.peek().copied() else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    if !matches!(lookahead.peek(), Some((Token::Equals, _))) {
        return Ok(None);
    }

    let (name, line) = (name.clone(), *line);
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens, end_line)?;
    Ok(Some(Statement::Assignment { name, value, line }))
}
