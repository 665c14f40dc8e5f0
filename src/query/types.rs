//! Query Data Types
//!
//! Records, field values, constraints and the response DTO returned by the
//! search endpoint.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single value stored under a record field.
///
/// Serialized untagged so a record round-trips as the JSON object the client
/// submitted. Only `Text` and `Number` take part in matching; anything else
/// (booleans, nulls, nested objects) is stored as-is and never satisfies a
/// constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => number.as_f64(),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// One schema-less submission: field name to value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl IntoIterator for Record {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single field-level matching rule parsed from a query fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// `field:"some words"`
    ExactPhrase { value: String },
    /// `field:token`
    FieldMatch { value: String },
    /// `field:min..max`, both bounds inclusive.
    NumericRange { min: u64, max: u64 },
}

impl Constraint {
    pub fn exact_phrase(value: impl Into<String>) -> Self {
        Constraint::ExactPhrase {
            value: value.into(),
        }
    }

    pub fn field_match(value: impl Into<String>) -> Self {
        Constraint::FieldMatch {
            value: value.into(),
        }
    }

    pub fn numeric_range(min: u64, max: u64) -> Self {
        Constraint::NumericRange { min, max }
    }
}

/// All constraints parsed from one query string, one per field.
///
/// Iterates in the order each field first appeared; a repeated field keeps
/// its position but takes the later constraint.
pub type QueryFilters = IndexMap<String, Constraint>;

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Record>,
    pub count: usize,
    pub filters: QueryFilters,
}
