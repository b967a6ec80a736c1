//! Core type definitions.
//!
//! Contains the severity classification used for ordering and tallying, and
//! the `Finding` record extracted from the audit stream.

mod finding;
mod severity;

pub use finding::Finding;
pub use severity::Severity;
