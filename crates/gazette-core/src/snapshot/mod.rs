//! Snapshot boundary.
//!
//! Raw JSON is checked for shape here, before it reaches the engine. A
//! snapshot that is empty but well-formed is valid; one missing `ministers`
//! is rejected as `InvalidSnapshot`.

pub mod parse;

pub use parse::{parse_structure_bytes, parse_structure_value, validate_structure};
