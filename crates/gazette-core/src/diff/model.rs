//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! String collections use `BTreeSet` so they serialize as lexicographically
//! sorted arrays; ministry lists are sorted by the assembler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::Minister;

/// The delta between two government structure snapshots
///
/// Field names serialize in camelCase (`addedMinisters`, `departmentsAdded`...).
/// An all-empty value means "no structural change".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Ministries whose key exists only in the amendment
    pub added_ministers: Vec<Minister>,
    /// Ministries whose key exists only in the base
    pub removed_ministers: Vec<Minister>,
    /// Shared ministries whose departments, laws or functions differ
    pub modified_ministers: Vec<ModifiedMinister>,
    /// Standalone (non-ministry) departments added
    pub added_departments: BTreeSet<String>,
    pub removed_departments: BTreeSet<String>,
    pub added_functions: BTreeSet<String>,
    pub removed_functions: BTreeSet<String>,
    pub added_laws: BTreeSet<String>,
    pub removed_laws: BTreeSet<String>,
}

impl ComparisonResult {
    /// True if no field carries a change
    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    /// Total number of reported changes across all fields
    ///
    /// A modified ministry counts once regardless of how many items moved.
    pub fn change_count(&self) -> usize {
        self.added_ministers.len()
            + self.removed_ministers.len()
            + self.modified_ministers.len()
            + self.added_departments.len()
            + self.removed_departments.len()
            + self.added_functions.len()
            + self.removed_functions.len()
            + self.added_laws.len()
            + self.removed_laws.len()
    }

    /// Composite keys of added ministries
    pub fn added_minister_keys(&self) -> BTreeSet<String> {
        self.added_ministers.iter().map(Minister::key).collect()
    }

    /// Composite keys of removed ministries
    pub fn removed_minister_keys(&self) -> BTreeSet<String> {
        self.removed_ministers.iter().map(Minister::key).collect()
    }

    /// Look up a modified ministry by composite key
    pub fn modified(&self, key: &str) -> Option<&ModifiedMinister> {
        self.modified_ministers.iter().find(|m| m.key == key)
    }
}

/// Per-collection changes for a ministry present in both snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedMinister {
    /// Composite key shared by both sides
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub name: String,
    pub departments_added: BTreeSet<String>,
    pub departments_removed: BTreeSet<String>,
    pub functions_added: BTreeSet<String>,
    pub functions_removed: BTreeSet<String>,
    pub laws_added: BTreeSet<String>,
    pub laws_removed: BTreeSet<String>,
    /// Rendering aid; only present when requested via `CompareOptions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<MinisterAlignment>,
}

/// Side-by-side rows for one shared ministry
///
/// Each list is the sorted union of both sides' items. It carries no
/// comparison semantics; it exists so a renderer can draw parallel columns
/// with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinisterAlignment {
    pub departments: Vec<AlignedItem>,
    pub laws: Vec<AlignedItem>,
    pub functions: Vec<AlignedItem>,
}

/// One row of an alignment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedItem {
    pub item: String,
    pub in_base: bool,
    pub in_amendment: bool,
}

impl AlignedItem {
    /// Cell text for the base column (`None` renders as a placeholder)
    pub fn base_cell(&self) -> Option<&str> {
        self.in_base.then_some(self.item.as_str())
    }

    /// Cell text for the amendment column (`None` renders as a placeholder)
    pub fn amendment_cell(&self) -> Option<&str> {
        self.in_amendment.then_some(self.item.as_str())
    }
}

/// A comparison together with the gazettes it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GazetteComparison {
    pub base_gazette_id: String,
    pub amendment_gazette_id: String,
    pub changes: ComparisonResult,
}
