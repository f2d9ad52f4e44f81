//! Positional arguments for `%` formatting

use std::fmt;

/// A positional argument consumed by a `%` specifier
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// An absent value; prints as `null`
    Null,
}

impl Arg {
    /// Short description of the argument's kind for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "a string",
            Arg::Int(_) => "an integer",
            Arg::Float(_) => "a float",
            Arg::Bool(_) => "a boolean",
            Arg::Char(_) => "a character",
            Arg::Null => "null",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" on whole numbers
            Arg::Float(x) => write!(f, "{:?}", x),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
            Arg::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

macro_rules! int_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

int_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Arg::from("a"), Arg::Str("a".to_string()));
        assert_eq!(Arg::from(7u8), Arg::Int(7));
        assert_eq!(Arg::from(-7i32), Arg::Int(-7));
        assert_eq!(Arg::from(1.5f32), Arg::Float(1.5));
        assert_eq!(Arg::from('x'), Arg::Char('x'));
        assert_eq!(Arg::from(None::<i32>), Arg::Null);
        assert_eq!(Arg::from(Some(true)), Arg::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::Float(3.0).to_string(), "3.0");
        assert_eq!(Arg::Float(0.25).to_string(), "0.25");
        assert_eq!(Arg::Null.to_string(), "null");
        assert_eq!(Arg::Int(-12).to_string(), "-12");
    }
}
