//! # verdict-core
//!
//! Core types shared across all verdict crates:
//! - `Record`, `Section`, and `Header` for parsed decision documents
//! - `IndexEntry` for the separate index file
//! - `ValidationError`, `ErrorKind`, and `Severity` for collected violations
//! - `RecordToken` for `<PREFIX>-<NUMBER>` references
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod ids;
pub mod index;
pub mod record;
pub mod report;

pub use enums::{ErrorKind, Severity};
pub use errors::CoreError;
pub use ids::RecordToken;
pub use index::IndexEntry;
pub use record::{Header, Record, Section};
pub use report::{ValidationError, ValidationReport};
