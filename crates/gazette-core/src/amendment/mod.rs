//! Column-addressed amendment operations.
//!
//! Amendment gazettes describe changes as operations against a numbered
//! column of a ministry's schedule. [`apply_amendment`] folds a list of such
//! operations into a base structure to produce the amended structure.

pub mod apply;
pub mod model;

pub use apply::{apply_amendment, parse_amendment_changes};
pub use model::{AmendmentChange, AmendmentColumn, AmendmentDetails, AmendmentOperation};
