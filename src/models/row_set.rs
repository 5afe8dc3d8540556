//! Query results: named columns and rows of SQLite values, plus the
//! resource identifier whose changes the result should be watched for.

use rusqlite::types::Value;
use serde_json::{Map, Number, Value as Json};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    notification_uri: String,
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns,
            rows,
            notification_uri: String::new(),
        }
    }

    pub fn with_notification_uri(mut self, uri: &str) -> Self {
        self.notification_uri = uri.to_string();
        self
    }

    /// The resource identifier this result was queried through.
    pub fn notification_uri(&self) -> &str {
        &self.notification_uri
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|values| RowRef { set: self, values })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |values| RowRef { set: self, values })
    }

    /// One JSON object per row, keyed by column name.
    pub fn to_json(&self) -> Json {
        Json::Array(
            self.rows()
                .map(|row| {
                    let mut obj = Map::new();
                    for (col, value) in self.columns.iter().zip(row.values) {
                        obj.insert(col.clone(), value_to_json(value));
                    }
                    Json::Object(obj)
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    set: &'a RowSet,
    values: &'a [Value],
}

impl<'a> RowRef<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.set.column_index(column).and_then(|i| self.values.get(i))
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_text(&self, column: &str) -> Option<&'a str> {
        match self.get(column)? {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(i) => Json::from(*i),
        Value::Real(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
        Value::Text(s) => Json::String(s.clone()),
        Value::Blob(b) => Json::String(format!("<{} bytes>", b.len())),
    }
}

/// Plain-text rendering used by the table printer.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
