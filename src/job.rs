//! TOML job files: a format string plus the records to render through it
//!
//! ```toml
//! format = "${name}, ${age} years old"
//! sort_by = "age"
//!
//! [[records]]
//! name = "Carl Johnson"
//! age = 37
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use toml::{Table, Value};

use crate::config::RenderConfig;
use crate::error::PrintError;
use crate::fields::Fields;
use crate::writer::{write_list_with, write_sorted_with};

/// Errors that can occur when loading a job file
#[derive(Error, Debug)]
pub enum JobError {
    #[error("Failed to read job file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse job TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A format string and the records it is rendered against
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    /// Template applied to every record
    pub format: String,
    /// Field to order records by; records are written in file order if unset
    #[serde(default)]
    pub sort_by: Option<String>,
    /// The records, one TOML table each
    #[serde(default)]
    pub records: Vec<Table>,
}

impl Job {
    /// Load a job from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, JobError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a job from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, JobError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the format string
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Order records by the given field
    pub fn with_sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Write every record, one per line
    pub fn run<W: Write + ?Sized>(&self, out: &mut W, config: &RenderConfig) -> Result<(), PrintError> {
        match &self.sort_by {
            Some(key) => {
                let keyed = self.records.iter().map(|record| SortKey { key, record });
                write_sorted_with(out, keyed, &self.format, config)
            }
            None => write_list_with(out, &self.records, &self.format, config),
        }
    }
}

/// A record ordered by the value of one of its fields
///
/// Records missing the field, or holding values of unrelated types, have no
/// order relative to each other.
#[derive(Debug, Clone, Copy)]
pub struct SortKey<'a> {
    pub key: &'a str,
    pub record: &'a Table,
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_values(self.record.get(self.key)?, other.record.get(other.key)?)
    }
}

impl Fields for SortKey<'_> {
    fn field(&self, name: &str) -> Option<&dyn Display> {
        self.record.field(name)
    }

    fn field_names(&self) -> Vec<&str> {
        self.record.field_names()
    }

    fn type_name(&self) -> &'static str {
        self.record.type_name()
    }
}

fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
        (Value::Datetime(a), Value::Datetime(b)) => Some(a.to_string().cmp(&b.to_string())),
        _ => None,
    }
}
