//! Column/value sets handed to insert and update, and SQL identifier checks.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use rusqlite::types::Value;
use std::sync::OnceLock;

/// Ordered set of column → value pairs. Putting a column twice replaces the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentValues {
    entries: Vec<(String, Value)>,
}

impl ContentValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column.to_string(), value)),
        }
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Parse a `column=value` assignment as typed on the command line.
    ///
    /// `null` → NULL, integer → INTEGER, real → REAL, anything else → TEXT.
    pub fn put_assignment(&mut self, assignment: &str) -> AppResult<&mut Self> {
        let (column, raw) = assignment.split_once('=').ok_or_else(|| {
            AppError::InvalidValue(format!("expected column=value, got {assignment:?}"))
        })?;
        let column = column.trim();
        check_identifier(column)?;
        Ok(self.put(column, parse_value(raw)))
    }
}

/// Best-effort typing of a textual value.
pub fn parse_value(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("null") {
        Value::Null
    } else if let Ok(i) = raw.parse::<i64>() {
        Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>()
        && raw.contains('.')
    {
        Value::Real(f)
    } else {
        Value::Text(raw.to_string())
    }
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z_][A-Za-z0-9_]*\.)?[A-Za-z_][A-Za-z0-9_]*$")
            .expect("identifier pattern is valid")
    })
}

/// Column names are spliced into SQL, so only plain (optionally
/// `alias.`-qualified) identifiers get through.
pub fn check_identifier(name: &str) -> AppResult<()> {
    if identifier_re().is_match(name) {
        Ok(())
    } else {
        Err(AppError::InvalidColumn(name.to_string()))
    }
}
