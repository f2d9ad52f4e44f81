//! Error types for positional formatting and console output

use std::io;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors from the `%` formatting stage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// A specifier refers to an argument that was not supplied
    #[error("missing argument for format specifier '{specifier}'")]
    MissingArgument { specifier: String, span: Span },

    /// The argument's kind does not fit the conversion
    #[error("format specifier '{specifier}' cannot be applied to {found}")]
    IllegalConversion {
        specifier: String,
        found: &'static str,
        span: Span,
    },

    /// Malformed specifier or unknown conversion character
    #[error("unknown format conversion '{specifier}'")]
    UnknownConversion { specifier: String, span: Span },

    /// Precision given to a conversion that does not take one
    #[error("precision not allowed in format specifier '{specifier}'")]
    IllegalPrecision { specifier: String, span: Span },
}

impl FormatError {
    pub fn missing_argument(specifier: impl Into<String>, span: Span) -> Self {
        Self::MissingArgument {
            specifier: specifier.into(),
            span,
        }
    }

    pub fn illegal_conversion(specifier: impl Into<String>, found: &'static str, span: Span) -> Self {
        Self::IllegalConversion {
            specifier: specifier.into(),
            found,
            span,
        }
    }

    pub fn unknown_conversion(specifier: impl Into<String>, span: Span) -> Self {
        Self::UnknownConversion {
            specifier: specifier.into(),
            span,
        }
    }

    pub fn illegal_precision(specifier: impl Into<String>, span: Span) -> Self {
        Self::IllegalPrecision {
            specifier: specifier.into(),
            span,
        }
    }

    /// Byte range of the offending specifier
    pub fn span(&self) -> &Span {
        match self {
            Self::MissingArgument { span, .. }
            | Self::IllegalConversion { span, .. }
            | Self::UnknownConversion { span, .. }
            | Self::IllegalPrecision { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// `source` must be the format string the error came from.
    pub fn report(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.hint())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn hint(&self) -> String {
        match self {
            Self::MissingArgument { .. } => "no argument left for this specifier".to_string(),
            Self::IllegalConversion { found, .. } => format!("argument is {}", found),
            Self::UnknownConversion { .. } => "use %% for a literal percent sign".to_string(),
            Self::IllegalPrecision { .. } => "remove the .precision part".to_string(),
        }
    }
}

/// Errors from the console writers
#[derive(Error, Debug)]
pub enum PrintError {
    /// The `%` formatting stage failed
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Writing to the output failed
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Two elements have no defined order relative to each other
    #[error("elements at positions {left} and {right} cannot be ordered")]
    Incomparable { left: usize, right: usize },
}
