//! Submission Search Service Library
//!
//! This library crate defines the modules behind the binary (`main.rs`).
//!
//! ## Modules
//! - **`query`**: The filter language. Parses `field:value` style queries and
//!   evaluates them against schema-less records.
//! - **`storage`**: The append-only record store and the submission endpoints.
//! - **`ingestion`**: File upload and content extraction (TXT, CSV, PDF).
//! - **`server`**: Router assembly, shared state and middleware.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: HTTP-facing error type.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod query;
pub mod server;
pub mod storage;
