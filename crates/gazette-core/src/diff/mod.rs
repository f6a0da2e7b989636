//! Government structure delta engine.
//!
//! Compares two structure snapshots (a base gazette and an amendment, or any
//! two snapshots) and produces a [`ComparisonResult`].
//!
//! ## Entry point
//!
//! ```ignore
//! use gazette_core::diff::compare;
//!
//! let result = compare(&base, &amendment);
//! let summary = gazette_core::diff::human_summary::render_human_summary(&result);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`key`]: composite ministry keys (`"{padded number}-{name}"`)
//! 2. [`set_delta`]: added / removed / unchanged over two sets
//! 3. [`minister`]: per-ministry added / removed / modified
//! 4. [`reconcile`]: backfill from provenance-flagged raw entities
//! 5. [`engine`]: standalone-level diff, presentation ordering, assembly
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical serialized output.
//! - **Self-comparison is empty**: `compare(s, s)` has no changes in any field.
//! - **Endpoint-only**: no history between the two snapshots is consulted.

pub mod engine;
pub mod human_summary;
pub mod key;
pub mod minister;
pub mod model;
pub mod options;
pub mod reconcile;
pub mod set_delta;

pub use engine::{compare, compare_json_bytes, compare_with_options};
pub use human_summary::render_human_summary;
pub use model::{ComparisonResult, GazetteComparison, ModifiedMinister};
pub use options::CompareOptions;
