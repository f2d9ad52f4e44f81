//! Positional `%`-style formatting
//!
//! This is the second stage of [`print_args`](crate::print_args): after field
//! substitution, the rendered text is treated as a printf-style format string
//! and filled from a list of positional [`Arg`]s.
//!
//! Specifiers follow `%[index$][flags][width][.precision]conversion`:
//!
//! | Conversion | Accepts | Output |
//! |------------|---------|--------|
//! | `s` `S` | anything | `Display` text (`S` upper-cases) |
//! | `d` | integers | decimal |
//! | `x` `X` `o` | integers | hex / octal |
//! | `f` `e` `E` | floats | fixed / scientific |
//! | `c` `C` | chars, integer code points | a single character |
//! | `b` `B` | anything | `true` for non-null, or the boolean itself |
//! | `%` | - | a literal `%` |
//! | `n` | - | a newline |
//!
//! ```rust
//! use object_formatter::{args, printf::sprintf};
//!
//! let out = sprintf("%s has %d potatoes (%.1f%%)", &args!["Ana", 3, 12.5]).unwrap();
//! assert_eq!(out, "Ana has 3 potatoes (12.5%)");
//! ```

mod arg;
pub mod lexer;
mod spec;

pub use arg::Arg;
pub use spec::{Conversion, Flags, Spec, SpecIndex};

use crate::error::FormatError;

use lexer::{lex, Token};

/// Fill the `%` specifiers in `format` from `args`
///
/// Arguments beyond those the format consumes are ignored.
pub fn sprintf(format: &str, args: &[Arg]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(format.len());
    let mut next = 0;
    let mut previous: Option<usize> = None;

    for (token, span) in lex(format) {
        let text = &format[span.clone()];
        match token {
            Token::Text => output.push_str(text),
            Token::Specifier => {
                let spec = Spec::parse(text, span.clone())?;
                if !spec.conversion.takes_argument() {
                    output.push_str(&spec.format(None)?);
                    continue;
                }
                let index = match spec.index {
                    SpecIndex::Next => {
                        next += 1;
                        next - 1
                    }
                    SpecIndex::Explicit(n) => n - 1,
                    SpecIndex::Previous => previous.ok_or_else(|| {
                        FormatError::missing_argument(text, span.clone())
                    })?,
                };
                let arg = args
                    .get(index)
                    .ok_or_else(|| FormatError::missing_argument(text, span.clone()))?;
                previous = Some(index);
                output.push_str(&spec.format(Some(arg))?);
            }
            Token::Invalid => return Err(FormatError::unknown_conversion(text, span)),
        }
    }

    Ok(output)
}

/// Build a `Vec<Arg>` from a list of expressions
///
/// ```rust
/// use object_formatter::{args, Arg};
///
/// assert_eq!(args![1, "two", 3.0], vec![Arg::Int(1), Arg::Str("two".into()), Arg::Float(3.0)]);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),*]
    };
}
