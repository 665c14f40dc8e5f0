//! Submission API Protocol
//!
//! Endpoints and Data Transfer Objects for writing and listing records.

use crate::query::types::Record;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint for submitting a new record.
pub const ENDPOINT_SUBMIT: &str = "/api/submit";
/// Public endpoint listing every stored record.
pub const ENDPOINT_SUBMISSIONS: &str = "/api/submissions";

// --- Data Transfer Objects ---

/// Acknowledgment for a stored submission.
///
/// Echoes the record as stored, including the generated `id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub data: Record,
}
