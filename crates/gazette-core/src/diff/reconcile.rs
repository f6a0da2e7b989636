//! Raw-entity reconciliation pass.
//!
//! Structured ministry lists are sometimes incomplete for an amendment. Raw
//! entities carry `added_by` / `removed_by` / `is_active` flags that can
//! supply the missing signal. Everything found here is unioned into the
//! result, so the pass is additive and idempotent: it never removes or
//! rewrites what the structured diff produced.

use std::time::Instant;

use crate::diff::model::ComparisonResult;
use crate::model::{EntityKind, EntityRecord, Minister, RawEntity};
use crate::{log_op_end, log_op_start};

/// What an entity's flags say about a given gazette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Introduced by this gazette and still active (or activity unknown)
    Added,
    /// Retired by this gazette and marked inactive
    Removed,
    /// Flags do not concern this gazette
    Untouched,
}

/// Classify a record's provenance relative to `gazette_id`
///
/// When both conditions hold (malformed data), `Added` wins.
pub fn provenance(record: &EntityRecord, gazette_id: &str) -> Provenance {
    let added = record.added_by.as_deref() == Some(gazette_id) && record.is_active != Some(false);
    if added {
        return Provenance::Added;
    }
    let removed = record.removed_by.as_deref() == Some(gazette_id) && record.is_active == Some(false);
    if removed {
        return Provenance::Removed;
    }
    Provenance::Untouched
}

/// Counters describing one reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    /// Entities whose flags matched and were folded into the result
    pub applied: usize,
    /// Entities whose flags did not concern the gazette
    pub untouched: usize,
    /// Recognised entities with no usable name
    pub skipped_unnamed: usize,
    /// Entities with no recognised label
    pub skipped_unrecognised: usize,
}

fn union_minister(ministers: &mut Vec<Minister>, record: &EntityRecord, name: &str) {
    let candidate = Minister::new(record.number.as_deref(), name);
    let key = candidate.key();
    if !ministers.iter().any(|m| m.key() == key) {
        ministers.push(candidate);
    }
}

/// Fold raw-entity signal for `gazette_id` into `result`
///
/// Best-effort: unnamed or unrecognised entities are skipped and logged at
/// debug level; nothing here can fail.
pub fn reconcile_raw_entities(
    result: &mut ComparisonResult,
    entities: &[RawEntity],
    gazette_id: &str,
) -> ReconcileStats {
    let start = Instant::now();
    log_op_start!(
        "reconcile_raw_entities",
        gazette_id = gazette_id,
        raw_entity_count = entities.len()
    );

    let mut stats = ReconcileStats::default();

    for entity in entities {
        let (Some(kind), Some(record)) = (entity.kind(), entity.record()) else {
            stats.skipped_unrecognised += 1;
            continue;
        };

        let Some(name) = record.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            tracing::debug!(
                gazette_id = gazette_id,
                kind = ?kind,
                "skipping raw entity without a name"
            );
            stats.skipped_unnamed += 1;
            continue;
        };

        let direction = provenance(record, gazette_id);
        match (direction, kind) {
            (Provenance::Untouched, _) => {
                stats.untouched += 1;
                continue;
            }
            (Provenance::Added, EntityKind::Minister) => {
                union_minister(&mut result.added_ministers, record, name)
            }
            (Provenance::Removed, EntityKind::Minister) => {
                union_minister(&mut result.removed_ministers, record, name)
            }
            (Provenance::Added, EntityKind::Department) => {
                result.added_departments.insert(name.to_string());
            }
            (Provenance::Removed, EntityKind::Department) => {
                result.removed_departments.insert(name.to_string());
            }
            (Provenance::Added, EntityKind::Function) => {
                result.added_functions.insert(name.to_string());
            }
            (Provenance::Removed, EntityKind::Function) => {
                result.removed_functions.insert(name.to_string());
            }
            (Provenance::Added, EntityKind::Law) => {
                result.added_laws.insert(name.to_string());
            }
            (Provenance::Removed, EntityKind::Law) => {
                result.removed_laws.insert(name.to_string());
            }
        }
        stats.applied += 1;
    }

    log_op_end!(
        "reconcile_raw_entities",
        duration_ms = start.elapsed().as_millis() as u64,
        gazette_id = gazette_id,
        applied = stats.applied,
        skipped = stats.skipped_unnamed + stats.skipped_unrecognised
    );

    stats
}
