//! Object Formatter - render `${field}` templates against any object
//!
//! This library substitutes `${name}` placeholders in a template with the
//! `Display` text of the object's field of the same name. Unknown names are
//! left in the output as written, so a mistyped placeholder never aborts a
//! render.
//!
//! # Example
//!
//! ```rust
//! use object_formatter::{fields, render};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fields!(Person { name, age });
//!
//! let person = Person { name: "Elliot Alderson".into(), age: 30 };
//! assert_eq!(
//!     render(&person, "${name}, ${age} years old"),
//!     "Elliot Alderson, 30 years old"
//! );
//! ```
//!
//! The console writers ([`print`], [`print_args`], [`print_list`],
//! [`print_sorted`]) wrap [`render`] for the common cases of printing one
//! object, one object plus `%`-style positional arguments, or a whole
//! collection.

pub mod config;
pub mod demo;
pub mod error;
pub mod fields;
pub mod job;
pub mod printf;
pub mod template;
pub mod writer;

pub use config::RenderConfig;
pub use error::{FormatError, PrintError};
pub use fields::Fields;
pub use job::{Job, JobError, SortKey};
pub use printf::{sprintf, Arg};
pub use template::{check_report, placeholders, render, resolve_field, unresolved, Placeholder};
pub use writer::{
    print, print_args, print_list, print_sorted, write_list, write_list_with, write_object,
    write_object_args, write_sorted, write_sorted_with,
};
