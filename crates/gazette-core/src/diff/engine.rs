//! Delta assembler.
//!
//! The core entry point is [`compare`], which accepts two typed snapshots and
//! produces a [`ComparisonResult`]. [`compare_json_bytes`] is the boundary
//! variant used by callers holding raw JSON.

use std::cmp::Ordering;
use std::time::Instant;

use crate::diff::key::ordinal_value;
use crate::diff::minister::reconcile_ministers;
use crate::diff::model::{ComparisonResult, GazetteComparison, ModifiedMinister};
use crate::diff::options::CompareOptions;
use crate::diff::reconcile::reconcile_raw_entities;
use crate::diff::set_delta::diff;
use crate::errors::{ExError, ExErrorKind};
use crate::model::{GovernmentStructure, Minister};
use crate::snapshot::parse_structure_bytes;
use crate::{log_op_end, log_op_start};

/// Presentation order for ministries
///
/// Numeric ordinal ascending (`"02"` before `"10"`); ministries without a
/// numeric ordinal sort last; ties break on case-sensitive name.
pub fn presentation_order(
    a_number: Option<&str>,
    a_name: &str,
    b_number: Option<&str>,
    b_name: &str,
) -> Ordering {
    match (ordinal_value(a_number), ordinal_value(b_number)) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| a_name.cmp(b_name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_name.cmp(b_name),
    }
}

/// Sort ministries for presentation
pub fn sort_ministers(ministers: &mut [Minister]) {
    ministers.sort_by(|a, b| {
        presentation_order(a.number.as_deref(), &a.name, b.number.as_deref(), &b.name)
            .then_with(|| a.key().cmp(&b.key()))
    });
}

fn sort_modified(modified: &mut [ModifiedMinister]) {
    modified.sort_by(|a, b| {
        presentation_order(a.number.as_deref(), &a.name, b.number.as_deref(), &b.name)
            .then_with(|| a.key.cmp(&b.key))
    });
}

/// Compare two snapshots with default options
///
/// Infallible: any two well-typed snapshots produce a result. Two identical
/// snapshots produce an empty result.
pub fn compare(base: &GovernmentStructure, amendment: &GovernmentStructure) -> ComparisonResult {
    compare_with_options(base, amendment, &CompareOptions::default())
}

/// Compare two snapshots
///
/// Only the two endpoints are consulted; no intermediate history is chained.
/// Raw entities are read from the amendment and matched against the
/// amendment's gazette id.
pub fn compare_with_options(
    base: &GovernmentStructure,
    amendment: &GovernmentStructure,
    options: &CompareOptions,
) -> ComparisonResult {
    let start = Instant::now();
    log_op_start!(
        "compare_structures",
        base_gazette_id = base.gazette_id.as_str(),
        amendment_gazette_id = amendment.gazette_id.as_str()
    );

    // Fast-path: identical snapshots. Skips reconciliation so that a
    // snapshot whose raw entities were added by itself still compares empty.
    if base == amendment {
        log_op_end!(
            "compare_structures",
            duration_ms = start.elapsed().as_millis() as u64,
            change_count = 0usize
        );
        return ComparisonResult::default();
    }

    let ministers = reconcile_ministers(base, amendment, options.include_alignment);
    let departments = diff(&base.departments, &amendment.departments);
    let laws = diff(&base.laws, &amendment.laws);
    let functions = diff(&base.functions, &amendment.functions);

    let mut result = ComparisonResult {
        added_ministers: ministers.added,
        removed_ministers: ministers.removed,
        modified_ministers: ministers.modified,
        added_departments: departments.added,
        removed_departments: departments.removed,
        added_functions: functions.added,
        removed_functions: functions.removed,
        added_laws: laws.added,
        removed_laws: laws.removed,
    };

    if options.reconcile_raw_entities {
        reconcile_raw_entities(&mut result, &amendment.raw_entities, &amendment.gazette_id);
    }

    sort_ministers(&mut result.added_ministers);
    sort_ministers(&mut result.removed_ministers);
    sort_modified(&mut result.modified_ministers);

    log_op_end!(
        "compare_structures",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = result.change_count()
    );

    result
}

/// Compare two JSON-encoded snapshots
///
/// # Errors
///
/// - `InvalidSnapshot`: either input fails boundary validation
/// - `DeterminismViolation`: the assembled result fails its serialization
///   round-trip (should never occur in correct builds)
pub fn compare_json_bytes(
    base_bytes: &[u8],
    amendment_bytes: &[u8],
    options: &CompareOptions,
) -> Result<GazetteComparison, ExError> {
    let base = parse_structure_bytes(base_bytes)?;
    let amendment = parse_structure_bytes(amendment_bytes)?;

    let comparison = GazetteComparison {
        changes: compare_with_options(&base, &amendment, options),
        base_gazette_id: base.gazette_id,
        amendment_gazette_id: amendment.gazette_id,
    };

    // Determinism guard: round-trip through JSON must produce an equal struct
    let serialized = serde_json::to_string(&comparison).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_json_bytes")
            .with_message(format!("failed to serialize comparison: {}", e))
    })?;
    let reparsed: GazetteComparison = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_json_bytes")
            .with_message(format!("failed to re-parse comparison: {}", e))
    })?;
    if reparsed != comparison {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op("compare_json_bytes")
            .with_message("comparison is not deterministic: round-trip produced different struct"));
    }

    Ok(comparison)
}
