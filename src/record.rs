//! The sales record type shared by every component.
//!
//! A record is an ordered mapping of column names to JSON values. The two
//! sources do not agree on a schema (the spreadsheet carries a dozen-odd
//! columns, the SQL table four), and the chart renderers already tolerate
//! missing fields, so the shape stays dynamic instead of a rigid struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesRecord(Map<String, Value>);

impl SalesRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Text value of a field, `None` when absent or not a string
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric value of a field, `None` when absent or not a number
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Field rendered as display text (numbers and bools included)
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(v) => v.to_string(),
        }
    }

    /// Case-insensitive substring containment against a text field.
    /// A missing or non-text field never matches.
    pub fn field_contains(&self, key: &str, needle: &str) -> bool {
        self.text(key)
            .is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase()))
    }
}

impl From<Map<String, Value>> for SalesRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl IntoIterator for SalesRecord {
    type Item = (String, Value);
    type IntoIter = <Map<String, Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
