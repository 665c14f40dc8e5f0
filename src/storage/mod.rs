//! Record Storage Module
//!
//! Holds the submitted records that searches run against.
//!
//! ## Core Concepts
//! - **Append-only**: Records are created on submission and never updated or deleted.
//! - **Snapshots**: Readers get a point-in-time `Vec<Arc<Record>>`; appends that
//!   arrive meanwhile are not visible to that reader.
//! - **Injection**: Handlers see the store only through the `RecordStore` trait,
//!   so tests can run against fixed fixtures.

pub mod handlers;
pub mod memory;
pub mod protocol;

pub use memory::{MemoryRecordStore, RecordStore};
