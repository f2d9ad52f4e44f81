//! Placeholder templates rendered against an object's fields
//!
//! A template is ordinary text containing `${name}` placeholders. Rendering
//! scans the placeholders left to right, asks the object for a field with the
//! exact same name and splices the field's `Display` text into the output.
//! Placeholders that resolve to nothing stay in the output untouched.
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
//! let person = Person { name: "Ana".into(), age: 5 };
//! assert_eq!(render(&person, "${name} is ${age}"), "Ana is 5");
//! assert_eq!(render(&person, "${email}"), "${email}");
//! ```

mod check;
pub mod lexer;
mod render;
mod resolver;
mod scanner;

pub use check::{check_report, unresolved};
pub use render::render;
pub use resolver::resolve_field;
pub use scanner::{placeholders, Placeholder};
