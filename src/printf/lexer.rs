//! Lexer for `%` format strings using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `%[index$|<][flags][width][.precision]conversion`
    ///
    /// Only the overall shape is matched here; [`Spec::parse`](super::Spec::parse)
    /// splits the index, flags, width and precision apart.
    #[regex(r"%[-#+ 0-9,<$.]*[a-zA-Z%]")]
    Specifier,

    /// Run of ordinary text
    #[regex(r"[^%]+")]
    Text,

    /// A `%` that does not start a well-formed specifier
    Invalid,
}

/// Lex a format string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Invalid), span))
}
