//! Lexer for `${name}` placeholder templates using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `${name}` where the name uses ASCII letters, digits, `_` and `.`
    #[regex(r"\$\{[.a-zA-Z0-9_]*\}")]
    Placeholder,

    /// A `$` that does not open a placeholder
    #[token("$")]
    Dollar,

    /// Run of ordinary text
    #[regex(r"[^$]+")]
    Text,
}

/// Lex a template into tokens with spans
///
/// Input the lexer cannot classify (an unterminated `${`, for instance) is
/// reported as [`Token::Text`], so the spans always tile the whole input.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}
