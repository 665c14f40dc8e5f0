//! Ingestion Module
//!
//! Accepts uploaded files and extracts their content.
//!
//! ## Workflow
//! 1. **Receive**: Reads the `file` part of a multipart request in memory.
//! 2. **Validate**: Checks the declared content type against the allowed list.
//! 3. **Extract**: Picks an extractor from the file extension (TXT, CSV, PDF).
//! 4. **Respond**: Returns the extracted text or rows; nothing is stored.

pub mod extract;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
