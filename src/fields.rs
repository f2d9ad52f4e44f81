//! Named-field lookup for template rendering
//!
//! [`Fields`] is the one capability a value needs to be rendered: given a
//! placeholder name, hand back something displayable or nothing. Structs get
//! an implementation from the [`fields!`](crate::fields) macro, which lists the
//! fields the struct itself declares. String-keyed maps and TOML tables
//! implement it directly, so callers can also render an explicit key-value
//! view of their data.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Values whose fields can be looked up by name
pub trait Fields {
    /// Look up a field by its exact, case-sensitive name
    ///
    /// Returns `None` when no such field exists or when the field holds no
    /// value.
    fn field(&self, name: &str) -> Option<&dyn Display>;

    /// Names of all fields visible to [`field`](Fields::field)
    fn field_names(&self) -> Vec<&str>;

    /// Type name used in diagnostics
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Implement [`Fields`] for a struct by listing its fields
///
/// Fields in the first list are always present. Fields in the optional
/// `nullable` list must be `Option<T>`; a `None` there reads as "no value"
/// and leaves the placeholder in place.
///
/// Only the listed fields are visible. Fields of an embedded struct are not
/// reachable through the outer type unless the outer type lists them.
///
/// ```rust
/// use object_formatter::{fields, render};
///
/// struct Account {
///     owner: String,
///     balance: i64,
///     nickname: Option<String>,
/// }
///
/// fields!(Account { owner, balance } nullable { nickname });
///
/// let account = Account { owner: "Ana".into(), balance: -3, nickname: None };
/// assert_eq!(render(&account, "${owner}: ${balance}"), "Ana: -3");
/// assert_eq!(render(&account, "${nickname}"), "${nickname}");
/// ```
#[macro_export]
macro_rules! fields {
    ($ty:ty { $($field:ident),* $(,)? } $(nullable { $($nullable:ident),* $(,)? })?) => {
        impl $crate::Fields for $ty {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::core::fmt::Display> {
                match name {
                    $(
                        ::core::stringify!($field) => ::core::option::Option::Some(
                            &self.$field as &dyn ::core::fmt::Display,
                        ),
                    )*
                    $($(
                        ::core::stringify!($nullable) => self
                            .$nullable
                            .as_ref()
                            .map(|value| value as &dyn ::core::fmt::Display),
                    )*)?
                    _ => ::core::option::Option::None,
                }
            }

            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![
                    $(::core::stringify!($field),)*
                    $($(::core::stringify!($nullable),)*)?
                ]
            }
        }
    };
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<&dyn Display> {
        (**self).field(name)
    }

    fn field_names(&self) -> Vec<&str> {
        (**self).field_names()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

macro_rules! forward_smart_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Fields + ?Sized> Fields for $ptr<T> {
                fn field(&self, name: &str) -> Option<&dyn Display> {
                    (**self).field(name)
                }

                fn field_names(&self) -> Vec<&str> {
                    (**self).field_names()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )*
    };
}

forward_smart_pointer!(Box, Rc, Arc);

impl<K, V, S> Fields for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn field(&self, name: &str) -> Option<&dyn Display> {
        self.get(name).map(|value| value as &dyn Display)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(|key| <K as Borrow<str>>::borrow(key)).collect()
    }
}

impl<K, V> Fields for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn field(&self, name: &str) -> Option<&dyn Display> {
        self.get(name).map(|value| value as &dyn Display)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(|key| <K as Borrow<str>>::borrow(key)).collect()
    }
}

/// TOML tables render strings without their quotes; every other value uses
/// its TOML `Display` form.
impl Fields for toml::Table {
    fn field(&self, name: &str) -> Option<&dyn Display> {
        use toml::Value;

        let value = self.get(name)?;
        let display: &dyn Display = match value {
            Value::String(s) => s,
            Value::Integer(i) => i,
            Value::Float(f) => f,
            Value::Boolean(b) => b,
            Value::Datetime(d) => d,
            Value::Array(_) | Value::Table(_) => value,
        };
        Some(display)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}
