use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `end_line`: Line of the last token, reported when the input ends
///   mid-expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use calcparse::{
///     ast::{BinaryOperator, Expr},
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let lexed = tokenize("1 + 2 * 3");
/// let expr = parse_expression(&mut lexed.tokens.iter().peekable(), 1).unwrap();
///
/// let Expr::BinaryOp { op, right, .. } = expr else { panic!("expected a binary operation") };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
///
/// let lexed = tokenize("1 +\n2 *");
/// let err = parse_expression(&mut lexed.tokens.iter().peekable(), 2).unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedToken { token: "newline".to_string(), line: 2 });
///
/// let lexed = tokenize("(1 +");
/// let err = parse_expression(&mut lexed.tokens.iter().peekable(), 1).unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 1 });
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, end_line)
}
