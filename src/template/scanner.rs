//! Placeholder scanning over the original, unmodified template

use super::lexer::{lex, Span, Token};

/// A `${name}` occurrence in a template
///
/// The span is a byte range into the template the placeholder was scanned
/// from; it stays valid only against that original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole token, `${` through `}`
    pub span: Span,
    /// The token text as written, e.g. `${name}`
    pub raw: &'a str,
    /// The name between the braces, possibly empty
    pub name: &'a str,
}

impl<'a> Placeholder<'a> {
    fn from_span(template: &'a str, span: Span) -> Self {
        let raw = &template[span.clone()];
        Self {
            name: &raw[2..raw.len() - 1],
            raw,
            span,
        }
    }
}

/// Find every placeholder in `template`, in order of appearance
pub fn placeholders(template: &str) -> impl Iterator<Item = Placeholder<'_>> + '_ {
    lex(template).filter_map(move |(tok, span)| match tok {
        Token::Placeholder => Some(Placeholder::from_span(template, span)),
        Token::Dollar | Token::Text => None,
    })
}
