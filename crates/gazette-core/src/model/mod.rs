//! Domain models for government structure snapshots
//!
//! - [`GovernmentStructure`]: one gazette's view of the government
//! - [`Minister`]: a ministry with its departments, laws and functions
//! - [`RawEntity`]: provenance-flagged records used only for reconciliation

pub mod raw_entity;
pub mod structure;

pub use raw_entity::{EntityKind, EntityRecord, RawEntity, RawEntityRecord};
pub use structure::{GovernmentStructure, Minister, UNKNOWN_NUMBER};
