use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single typed value inside a multi-valued record field.
///
/// The two variants never mix within one column: the filter catalog
/// declares each column as text or number, and normalization enforces
/// it. A numeric 5 and a textual "5" are therefore distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            // Arbitrary but total; well-formed columns hold one variant only
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One legislation record, normalized and read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based position in load order, stable for the dataset's lifetime
    pub id: usize,
    /// Multi-valued catalog columns, split and typed
    pub facets: IndexMap<String, Vec<FieldValue>>,
    /// Remaining single-valued columns, raw as read
    pub fields: IndexMap<String, String>,
}

impl Record {
    /// Normalized values of a catalog column; empty for unknown columns
    pub fn facet(&self, field: &str) -> &[FieldValue] {
        self.facets.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Raw value of a single-valued column
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
