//! Parse and validate government structure snapshots.

use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::errors::{ExError, ExErrorKind, GazetteError, Result};
use crate::model::GovernmentStructure;
use crate::{log_op_end, log_op_error, log_op_start};

/// Keys that must be present on every snapshot (either spelling)
const REQUIRED_FIELDS: &[(&str, &str)] = &[("gazetteId", "gazette_id"), ("ministers", "ministers")];

/// Parse raw snapshot bytes into a validated [`GovernmentStructure`]
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not UTF-8 JSON, the root is not an object,
///   a required field is absent, a field has the wrong type, or structural
///   validation fails (see [`validate_structure`])
pub fn parse_structure_bytes(bytes: &[u8]) -> std::result::Result<GovernmentStructure, ExError> {
    let start = Instant::now();
    log_op_start!("parse_structure", byte_len = bytes.len());

    let outcome = std::str::from_utf8(bytes)
        .map_err(|e| {
            ExError::new(ExErrorKind::InvalidSnapshot)
                .with_message(format!("snapshot is not valid UTF-8: {}", e))
        })
        .and_then(|text| {
            serde_json::from_str::<Value>(text).map_err(|e| {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_message(format!("snapshot is not valid JSON: {}", e))
            })
        })
        .and_then(|raw| parse_structure_value(raw).map_err(ExError::from));

    let duration_ms = start.elapsed().as_millis() as u64;
    match outcome {
        Ok(structure) => {
            log_op_end!(
                "parse_structure",
                duration_ms = duration_ms,
                gazette_id = structure.gazette_id.as_str(),
                minister_count = structure.ministers.len()
            );
            Ok(structure)
        }
        Err(err) => {
            let err = err.with_op("parse_structure");
            log_op_error!("parse_structure", err.clone(), duration_ms = duration_ms);
            Err(err)
        }
    }
}

/// Decode an already-parsed JSON value into a validated structure
///
/// # Errors
///
/// - `MissingField`: `gazetteId` or `ministers` absent
/// - `InvalidSnapshot`: root is not an object or a field has the wrong type
/// - `EmptyMinisterName` / `DuplicateMinisterKey`: see [`validate_structure`]
pub fn parse_structure_value(raw: Value) -> Result<GovernmentStructure> {
    let obj = raw.as_object().ok_or_else(|| GazetteError::InvalidSnapshot {
        gazette_id: None,
        reason: "snapshot JSON root must be an object".to_string(),
    })?;

    let gazette_id = obj
        .get("gazetteId")
        .or_else(|| obj.get("gazette_id"))
        .and_then(Value::as_str)
        .map(str::to_string);

    for (camel, snake) in REQUIRED_FIELDS {
        if !obj.contains_key(*camel) && !obj.contains_key(*snake) {
            return Err(GazetteError::MissingField {
                gazette_id,
                field: camel.to_string(),
            });
        }
    }

    let structure: GovernmentStructure =
        serde_json::from_value(raw).map_err(|e| GazetteError::InvalidSnapshot {
            gazette_id: gazette_id.clone(),
            reason: format!("failed to deserialize snapshot: {}", e),
        })?;

    validate_structure(&structure)?;
    Ok(structure)
}

/// Check the invariants a snapshot must satisfy before comparison
///
/// # Errors
///
/// - `EmptyMinisterName`: a ministry name is empty or whitespace-only
/// - `DuplicateMinisterKey`: two ministries share a composite key
pub fn validate_structure(structure: &GovernmentStructure) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, minister) in structure.ministers.iter().enumerate() {
        if minister.name.trim().is_empty() {
            return Err(GazetteError::EmptyMinisterName {
                gazette_id: structure.gazette_id.clone(),
                index,
            });
        }
        let key = minister.key();
        if !seen.insert(key.clone()) {
            return Err(GazetteError::DuplicateMinisterKey {
                gazette_id: structure.gazette_id.clone(),
                key,
            });
        }
    }
    Ok(())
}
