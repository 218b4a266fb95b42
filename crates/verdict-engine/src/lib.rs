//! # verdict-engine
//!
//! Validation, repair, and run orchestration for decision records.
//!
//! - [`workspace`]: discovery and the per-run snapshot of records, index, and
//!   glossary documents
//! - [`validate`]: the ordered validator pipeline shared by every mode
//! - [`fix`]: pure content fixers, index regeneration, and atomic writes
//! - [`driver`]: `check`, `fix`, and staged checking
//!
//! Nothing here reads configuration or environment on its own; callers pass
//! a loaded `GovernanceConfig` by reference.

pub mod discover;
pub mod driver;
pub mod error;
pub mod fix;
pub mod validate;
pub mod workspace;

pub use driver::{
    CheckOptions, FixFailure, FixOptions, FixRun, RepairedFile, Scope, render_index, run_check,
    run_fix,
};
pub use error::{EngineError, FixError};
pub use validate::run_pipeline;
pub use workspace::Workspace;
