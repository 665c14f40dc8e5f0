use super::types::{Constraint, FieldValue, QueryFilters, Record};
use std::borrow::Borrow;

impl Constraint {
    /// Checks one field of a record against this constraint.
    ///
    /// Returns `true` when the constraint holds or does not apply. A range
    /// never applies vacuously: a missing or non-numeric value fails it. Text
    /// constraints only look at text values and pass everything else through.
    pub fn admits(&self, value: Option<&FieldValue>) -> bool {
        match self {
            Constraint::NumericRange { min, max } => match value {
                Some(FieldValue::Number(n)) => in_range(n, *min, *max),
                _ => false,
            },
            Constraint::ExactPhrase { value: expected }
            | Constraint::FieldMatch { value: expected } => match value.and_then(FieldValue::as_text) {
                Some(actual) => actual.to_lowercase() == expected.to_lowercase(),
                None => true,
            },
        }
    }
}

/// Integers compare exactly against the bounds; negatives are below any
/// bound. Only floats go through `f64`.
fn in_range(n: &serde_json::Number, min: u64, max: u64) -> bool {
    if let Some(v) = n.as_u64() {
        min <= v && v <= max
    } else if n.is_i64() {
        false
    } else {
        n.as_f64().is_some_and(|v| min as f64 <= v && v <= max as f64)
    }
}

/// Returns the records that satisfy every filter, in their original order.
///
/// Evaluation of a record stops at its first failing constraint.
pub fn evaluate<'a, R>(records: &'a [R], filters: &QueryFilters) -> Vec<&'a R>
where
    R: Borrow<Record>,
{
    records
        .iter()
        .filter(|record| {
            let record: &Record = (*record).borrow();
            record_matches(record, filters)
        })
        .collect()
}

pub fn record_matches(record: &Record, filters: &QueryFilters) -> bool {
    filters
        .iter()
        .all(|(field, constraint)| constraint.admits(record.get(field)))
}
