use std::str::FromStr;

use bigdecimal::BigDecimal;
use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Decimal literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    ///
    /// The written scale is preserved, so `1.50` keeps two fractional
    /// digits.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_decimal)]
    #[regex(r"\.[0-9]+", parse_decimal)]
    Number(BigDecimal),
    /// Identifier tokens; variable, constant or function names such as `x` or
    /// `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The tokens of a source up to its first lexical error.
///
/// The parser consumes `tokens`; once they run out, a pending `error` takes
/// precedence over an end-of-input complaint.
pub struct Tokenized {
    /// `(token, line)` pairs in source order.
    pub tokens: Vec<(Token, usize)>,
    /// The offending slice and its line, if lexing stopped early.
    pub error:  Option<(String, usize)>,
}

/// Tokenizes `source`, stopping at the first unrecognized character.
///
/// # Example
/// ```
/// use calcparse::interpreter::lexer::{Token, tokenize};
///
/// let lexed = tokenize("x = 2\ny $");
/// assert_eq!(lexed.tokens[0].0, Token::Name("x".to_string()));
/// assert_eq!(lexed.tokens[3], (Token::NewLine, 1));
/// assert_eq!(lexed.tokens[4].1, 2);
/// assert_eq!(lexed.error, Some(("$".to_string(), 2)));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenized {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        // A newline belongs to the line it ends.
        let line = lexer.extras.line;
        match lexer.next() {
            Some(Ok(tok)) => tokens.push((tok, line)),
            Some(Err(_)) => {
                return Tokenized { tokens,
                                   error: Some((lexer.slice().to_string(), line)) };
            },
            None => break,
        }
    }

    Tokenized { tokens, error: None }
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(BigDecimal)`: The exact value of the literal.
/// - `None`: If the slice is not a valid decimal.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<BigDecimal> {
    BigDecimal::from_str(lex.slice().trim_end_matches('.')).ok()
}
