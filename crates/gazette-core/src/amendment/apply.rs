//! Apply amendment operations to a base structure.

use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::amendment::model::{AmendmentChange, AmendmentColumn, AmendmentOperation};
use crate::errors::{ExError, GazetteError};
use crate::model::{GovernmentStructure, Minister};
use crate::{log_op_end, log_op_start};

fn column_mut(minister: &mut Minister, column: AmendmentColumn) -> &mut BTreeSet<String> {
    match column {
        AmendmentColumn::Functions => &mut minister.functions,
        AmendmentColumn::Departments => &mut minister.departments,
        AmendmentColumn::Laws => &mut minister.laws,
    }
}

fn apply_to_minister(minister: &mut Minister, change: &AmendmentChange, column: AmendmentColumn) {
    let details = &change.details;
    match change.operation_type {
        AmendmentOperation::Insertion => {
            column_mut(minister, column).extend(details.added_content.iter().cloned());
        }
        AmendmentOperation::Deletion => {
            column_mut(minister, column).retain(|item| {
                !details
                    .deleted_sections
                    .iter()
                    .any(|section| item.contains(section.as_str()))
            });
        }
        AmendmentOperation::Update => {
            let substituted = details.substituted_items.iter().cloned();
            match column {
                // Functions are amended additively
                AmendmentColumn::Functions => minister.functions.extend(substituted),
                _ => *column_mut(minister, column) = substituted.collect(),
            }
        }
        AmendmentOperation::Unsupported => {}
    }
}

/// Apply `changes` to `base`, producing the structure for `gazette_id`
///
/// Operations are applied in order. Ministries are matched by exact name;
/// when several ministries share the name, each receives the operation.
/// Operations that cannot be applied (unknown ministry, operation type or
/// column) are skipped and logged at debug level. The base is not modified
/// and the result carries no raw entities.
pub fn apply_amendment(
    base: &GovernmentStructure,
    gazette_id: &str,
    changes: &[AmendmentChange],
) -> GovernmentStructure {
    let start = Instant::now();
    log_op_start!(
        "apply_amendment",
        base_gazette_id = base.gazette_id.as_str(),
        gazette_id = gazette_id,
        change_count = changes.len()
    );

    let mut ministers = base.ministers.clone();
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for (position, change) in changes.iter().enumerate() {
        if change.operation_type == AmendmentOperation::Unsupported {
            tracing::debug!(position, "skipping amendment operation of unsupported type");
            skipped += 1;
            continue;
        }

        let Some(column) = change.column() else {
            tracing::debug!(
                position,
                column_no = ?change.details.column_no,
                "skipping amendment operation with unrecognised column"
            );
            skipped += 1;
            continue;
        };

        let name = change.details.name.as_deref().unwrap_or_default();
        let mut matched = false;
        for minister in ministers.iter_mut().filter(|m| m.name == name) {
            apply_to_minister(minister, change, column);
            matched = true;
        }

        if matched {
            applied += 1;
        } else {
            tracing::debug!(
                position,
                minister_name = name,
                "skipping amendment operation for ministry not in base structure"
            );
            skipped += 1;
        }
    }

    let result = GovernmentStructure {
        gazette_id: gazette_id.to_string(),
        ministers,
        departments: base.departments.clone(),
        laws: base.laws.clone(),
        functions: base.functions.clone(),
        raw_entities: Vec::new(),
    };

    log_op_end!(
        "apply_amendment",
        duration_ms = start.elapsed().as_millis() as u64,
        gazette_id = gazette_id,
        applied = applied,
        skipped = skipped
    );

    result
}

/// Decode an amendment operations document
///
/// Accepts either a bare array of operations or an object with a `changes`
/// array. Each operation decodes on its own: one that does not decode is
/// skipped and logged at debug level, and the rest are returned.
///
/// # Errors
///
/// - `InvalidInput`: not JSON, or the root is not an operations array /
///   `{changes: [...]}` object
pub fn parse_amendment_changes(bytes: &[u8]) -> Result<Vec<AmendmentChange>, ExError> {
    decode_changes(bytes).map_err(|e| ExError::from(e).with_op("parse_amendment"))
}

fn decode_changes(bytes: &[u8]) -> crate::errors::Result<Vec<AmendmentChange>> {
    let raw: Value = serde_json::from_slice(bytes).map_err(|e| GazetteError::InvalidAmendment {
        reason: format!("not valid JSON: {}", e),
    })?;

    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("changes") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(GazetteError::InvalidAmendment {
                    reason: "object root must carry a `changes` array".to_string(),
                })
            }
        },
        _ => {
            return Err(GazetteError::InvalidAmendment {
                reason: "root must be an array or an object".to_string(),
            })
        }
    };

    let mut changes = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<AmendmentChange>(item) {
            Ok(change) => changes.push(change),
            Err(e) => {
                tracing::debug!(
                    position,
                    error = %e,
                    "skipping amendment operation that does not decode"
                );
            }
        }
    }
    Ok(changes)
}
