//! Gazette Core - Government structure delta engine
//!
//! This crate compares two snapshots of a government's organisational
//! structure (ministries with their departments, laws and functions, as
//! published in successive gazettes) and reports what changed:
//! - Composite ministry keys and display ordinals (`diff::key`)
//! - Generic set differencing (`diff::set_delta`)
//! - Per-ministry reconciliation and alignment sets (`diff::minister`)
//! - Backfilling from provenance-flagged raw entities (`diff::reconcile`)
//! - Deterministic assembly of the final result (`diff::engine`)
//! - Applying column-addressed amendment operations to a base (`amendment`)
//!
//! The engine is pure: it reads already-fetched snapshots and returns a fresh
//! result. Only decoding raw JSON (`snapshot`, `amendment::parse_amendment_changes`)
//! can fail.

pub mod amendment;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod snapshot;

// Re-export commonly used types
pub use amendment::{apply_amendment, AmendmentChange};
pub use diff::{compare, compare_with_options, CompareOptions, ComparisonResult, GazetteComparison};
pub use errors::{ExError, ExErrorKind, GazetteError, Result};
pub use model::{GovernmentStructure, Minister, RawEntity};
