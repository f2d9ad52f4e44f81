//! Parsing and application of a single `%` specifier

use crate::error::FormatError;

use super::arg::Arg;
use super::lexer::Span;

/// Which argument a specifier consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecIndex {
    /// The next argument in sequence
    Next,
    /// `n$`, 1-based
    Explicit(usize),
    /// `<`, the argument used by the previous specifier
    Previous,
}

/// Specifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `-`
    pub left_align: bool,
    /// `#`
    pub alternate: bool,
    /// `+`
    pub plus: bool,
    /// ` `
    pub space: bool,
    /// `0`
    pub zero_pad: bool,
    /// `,`
    pub grouping: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    String { upper: bool },
    Decimal,
    Hex { upper: bool },
    Octal,
    Fixed,
    Scientific { upper: bool },
    Char { upper: bool },
    Boolean { upper: bool },
    Percent,
    Newline,
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            's' => Conversion::String { upper: false },
            'S' => Conversion::String { upper: true },
            'd' => Conversion::Decimal,
            'x' => Conversion::Hex { upper: false },
            'X' => Conversion::Hex { upper: true },
            'o' => Conversion::Octal,
            'f' => Conversion::Fixed,
            'e' => Conversion::Scientific { upper: false },
            'E' => Conversion::Scientific { upper: true },
            'c' => Conversion::Char { upper: false },
            'C' => Conversion::Char { upper: true },
            'b' => Conversion::Boolean { upper: false },
            'B' => Conversion::Boolean { upper: true },
            '%' => Conversion::Percent,
            'n' => Conversion::Newline,
            _ => return None,
        })
    }

    /// Whether the conversion consumes a positional argument
    pub fn takes_argument(self) -> bool {
        !matches!(self, Conversion::Percent | Conversion::Newline)
    }

    fn accepts_precision(self) -> bool {
        matches!(
            self,
            Conversion::String { .. }
                | Conversion::Boolean { .. }
                | Conversion::Fixed
                | Conversion::Scientific { .. }
        )
    }

    fn is_upper(self) -> bool {
        matches!(
            self,
            Conversion::String { upper: true }
                | Conversion::Hex { upper: true }
                | Conversion::Scientific { upper: true }
                | Conversion::Char { upper: true }
                | Conversion::Boolean { upper: true }
        )
    }
}

/// A parsed `%` specifier
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    pub index: SpecIndex,
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
    /// The specifier as written
    pub raw: String,
    /// Byte range of the specifier in the format string
    pub span: Span,
}

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Largest width or precision a specifier may ask for
pub const MAX_WIDTH: usize = 1 << 16;

impl Spec {
    /// Parse a specifier already recognized by the lexer
    ///
    /// The lexer only checks the character set, so out-of-order parts such
    /// as `%5-s` or `%1$<s` are rejected here.
    pub fn parse(raw: &str, span: Span) -> Result<Self, FormatError> {
        let bytes = raw.as_bytes();
        // The lexer guarantees a leading '%' and a trailing conversion byte.
        let last = bytes.len() - 1;
        let mut pos = 1;

        let index = if bytes[pos] == b'<' {
            pos += 1;
            SpecIndex::Previous
        } else {
            let digits_end = skip_digits(bytes, pos, last);
            if digits_end > pos && bytes[digits_end] == b'$' {
                let n: usize = raw[pos..digits_end].parse().unwrap_or(0);
                if n == 0 {
                    return Err(FormatError::missing_argument(raw, span));
                }
                pos = digits_end + 1;
                SpecIndex::Explicit(n)
            } else {
                SpecIndex::Next
            }
        };

        let mut flags = Flags::default();
        while pos < last {
            match bytes[pos] {
                b'-' => flags.left_align = true,
                b'#' => flags.alternate = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b'0' => flags.zero_pad = true,
                b',' => flags.grouping = true,
                _ => break,
            }
            pos += 1;
        }

        let width_end = skip_digits(bytes, pos, last);
        let width = if width_end > pos {
            let width = raw[pos..width_end]
                .parse()
                .ok()
                .filter(|&width| width <= MAX_WIDTH)
                .ok_or_else(|| FormatError::unknown_conversion(raw, span.clone()))?;
            pos = width_end;
            Some(width)
        } else {
            None
        };

        let precision = if pos < last && bytes[pos] == b'.' {
            let precision_end = skip_digits(bytes, pos + 1, last);
            let precision = raw[pos + 1..precision_end]
                .parse()
                .ok()
                .filter(|&precision| precision <= MAX_WIDTH)
                .ok_or_else(|| FormatError::illegal_precision(raw, span.clone()))?;
            pos = precision_end;
            Some(precision)
        } else {
            None
        };

        if pos != last {
            return Err(FormatError::unknown_conversion(raw, span));
        }

        let conversion = Conversion::from_char(bytes[last] as char)
            .ok_or_else(|| FormatError::unknown_conversion(raw, span.clone()))?;
        if precision.is_some() && !conversion.accepts_precision() {
            return Err(FormatError::illegal_precision(raw, span));
        }

        Ok(Self {
            index,
            flags,
            width,
            precision,
            conversion,
            raw: raw.to_string(),
            span,
        })
    }

    /// Format one argument according to this specifier
    ///
    /// `arg` is ignored by conversions that take no argument.
    pub fn format(&self, arg: Option<&Arg>) -> Result<String, FormatError> {
        let null = Arg::Null;
        let arg = arg.unwrap_or(&null);
        let body = match self.conversion {
            Conversion::Percent => "%".to_string(),
            Conversion::Newline => return Ok("\n".to_string()),
            Conversion::String { .. } => self.truncate(arg.to_string()),
            Conversion::Boolean { .. } => {
                let value = match arg {
                    Arg::Null => false,
                    Arg::Bool(b) => *b,
                    _ => true,
                };
                self.truncate(value.to_string())
            }
            Conversion::Char { .. } => match arg {
                Arg::Char(c) => c.to_string(),
                Arg::Int(i) => u32::try_from(*i)
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
                    .ok_or_else(|| self.illegal(arg))?,
                Arg::Null => "null".to_string(),
                _ => return Err(self.illegal(arg)),
            },
            Conversion::Decimal => match arg {
                Arg::Int(i) => {
                    let digits = i.unsigned_abs().to_string();
                    let digits = if self.flags.grouping {
                        group_thousands(&digits)
                    } else {
                        digits
                    };
                    self.signed(*i < 0, "", &digits)
                }
                Arg::Null => "null".to_string(),
                _ => return Err(self.illegal(arg)),
            },
            Conversion::Hex { .. } | Conversion::Octal => match arg {
                Arg::Int(i) => {
                    let (digits, prefix) = if self.conversion == Conversion::Octal {
                        (format!("{:o}", i), "0")
                    } else {
                        (format!("{:x}", i), "0x")
                    };
                    let prefix = if self.flags.alternate { prefix } else { "" };
                    self.zero_padded("", prefix, &digits)
                }
                Arg::Null => "null".to_string(),
                _ => return Err(self.illegal(arg)),
            },
            Conversion::Fixed | Conversion::Scientific { .. } => match arg {
                Arg::Float(x) => self.float(*x),
                Arg::Null => "null".to_string(),
                _ => return Err(self.illegal(arg)),
            },
        };

        let body = if self.conversion.is_upper() {
            body.to_uppercase()
        } else {
            body
        };
        Ok(self.pad(body))
    }

    fn float(&self, x: f64) -> String {
        if x.is_nan() {
            return "NaN".to_string();
        }
        if x.is_infinite() {
            let sign = if x < 0.0 {
                "-"
            } else if self.flags.plus {
                "+"
            } else {
                ""
            };
            return format!("{}Infinity", sign);
        }

        let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
        let magnitude = x.abs();
        let digits = match self.conversion {
            Conversion::Scientific { .. } => scientific(magnitude, precision),
            _ => {
                let fixed = format!("{:.*}", precision, magnitude);
                if self.flags.grouping {
                    match fixed.split_once('.') {
                        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
                        None => group_thousands(&fixed),
                    }
                } else {
                    fixed
                }
            }
        };
        self.signed(x.is_sign_negative() && x != 0.0, "", &digits)
    }

    fn signed(&self, negative: bool, prefix: &str, digits: &str) -> String {
        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        self.zero_padded(sign, prefix, digits)
    }

    fn zero_padded(&self, sign: &str, prefix: &str, digits: &str) -> String {
        let used = sign.len() + prefix.len() + digits.len();
        let zeros = match self.width {
            Some(width) if self.flags.zero_pad && !self.flags.left_align && width > used => {
                width - used
            }
            _ => 0,
        };
        format!("{}{}{}{}", sign, prefix, "0".repeat(zeros), digits)
    }

    fn truncate(&self, text: String) -> String {
        match self.precision {
            Some(precision) => text.chars().take(precision).collect(),
            None => text,
        }
    }

    fn pad(&self, body: String) -> String {
        let len = body.chars().count();
        match self.width {
            Some(width) if width > len => {
                let fill = " ".repeat(width - len);
                if self.flags.left_align {
                    body + &fill
                } else {
                    fill + &body
                }
            }
            _ => body,
        }
    }

    fn illegal(&self, arg: &Arg) -> FormatError {
        FormatError::illegal_conversion(&self.raw, arg.kind(), self.span.clone())
    }
}

fn skip_digits(bytes: &[u8], start: usize, limit: usize) -> usize {
    let mut pos = start;
    while pos < limit && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `1.500000e+02` style, with at least two exponent digits
fn scientific(magnitude: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, magnitude);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
