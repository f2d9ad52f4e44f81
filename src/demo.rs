//! The bundled walkthrough printed by `object-formatter --demo`

use std::io::Write;

use crate::error::PrintError;
use crate::writer::{write_list, write_object};

/// Sample record type
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    name: String,
    age: u32,
}

crate::fields!(Person { name, age });

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Write the walkthrough: one formatted person, then a formatted list
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<(), PrintError> {
    let elliot = Person::new("Elliot Alderson", 30);
    writeln!(out, "Testing string formatting...")?;
    write_object(out, &elliot, "${name}, ${age} years old\n\n")?;

    let people = vec![
        Person::new("Carl Johnson", 37),
        Person::new("Big Smoke", 43),
        Person::new("OG Loc", 35),
    ];
    writeln!(out, "Testing list formatting...")?;
    write_list(out, &people, "${name}, ${age} years old")?;
    Ok(())
}
