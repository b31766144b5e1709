use logos::Logos;

/// Represents a lexical token in an infix arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression alphabet.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: any contiguous run of digits and dots.
    ///
    /// The run is deliberately permissive. Well-formedness of the literal
    /// is not checked until evaluation, so `1.2.3` lexes as a single token
    /// and only fails once it is evaluated.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Maps a token to its operator character.
///
/// Returns `Some(char)` when the token is one of the four binary operator
/// tokens, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to classify.
///
/// # Returns
/// `Some('+' | '-' | '*' | '/')` for an operator token, otherwise `None`.
///
/// # Example
/// ```
/// use exprtree::engine::lexer::{Token, operator_char};
///
/// assert_eq!(operator_char(&Token::Plus), Some('+'));
/// assert_eq!(operator_char(&Token::LParen), None);
/// ```
#[must_use]
pub const fn operator_char(token: &Token) -> Option<char> {
    match token {
        Token::Plus => Some('+'),
        Token::Minus => Some('-'),
        Token::Star => Some('*'),
        Token::Slash => Some('/'),
        _ => None,
    }
}
