//! Query Module
//!
//! The search core: a field-level filter language and its evaluation over
//! schema-less records.
//!
//! ## Syntax
//! A query is a space-separated list of fragments, all of which must hold:
//! - `name:"John Doe"`: exact phrase, case-insensitive.
//! - `salary:40000..60000`: inclusive integer range.
//! - `email:jane@example.com`: single token, case-insensitive.
//!
//! Anything else in the string is ignored.
//!
//! ## Submodules
//! - **`parser`**: Turns a query string into `QueryFilters`.
//! - **`evaluator`**: Applies `QueryFilters` to a record slice.
//! - **`handlers`**: The `/api/search` endpoint.
//! - **`types`**: Records, constraints and response DTOs.

pub mod evaluator;
pub mod handlers;
pub mod parser;
pub mod types;

pub use evaluator::evaluate;
pub use parser::parse;
pub use types::{Constraint, FieldValue, QueryFilters, Record};
