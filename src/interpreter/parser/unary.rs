use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_closing_paren,
        },
    },
};

/// Parses a postfix expression: a unary expression followed by any number of
/// factorials.
///
/// `3!!` is `(3!)!`. Since negation binds tighter, `-3!` is `(-3)!`.
///
/// Grammar:
/// ```text
///     postfix := unary "!"*
/// ```
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_unary(tokens, end_line)?;
    while let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        expr = Expr::UnaryOp { op:   UnaryOperator::Factorial,
                               expr: Box::new(expr),
                               line: *line, };
    }
    Ok(expr)
}

/// Parses a unary expression.
///
/// Prefix `-` is right-associative, so `--x` is `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, end_line)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_primary(tokens, end_line)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME
///              | NAME "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `end_line`: Line reported when the tokens run out.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Literal { value: value.clone(),
                                                                 line:  *line, }),
        Some((Token::Name(name), line)) => parse_name(tokens, name, *line, end_line),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens, end_line)?;
            expect_closing_paren(tokens, end_line)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}

/// Parses what follows a name: a call when `(` comes next, a variable
/// reference otherwise.
fn parse_name<'a, I>(tokens: &mut Peekable<I>,
                     name: &str,
                     line: usize,
                     end_line: usize)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let argument = parse_expression(tokens, end_line)?;
        expect_closing_paren(tokens, end_line)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       argument: Box::new(argument),
                                       line });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        line })
}
