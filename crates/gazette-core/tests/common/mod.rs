use gazette_core::model::{EntityKind, EntityRecord, GovernmentStructure, Minister, RawEntity};
use serde_json::{json, Value};

/// Build a ministry with the given departments
#[allow(dead_code)]
pub fn minister(number: Option<&str>, name: &str, departments: &[&str]) -> Minister {
    Minister::new(number, name).with_departments(departments.iter().copied())
}

/// Build a structure from a gazette id and its ministries, in order
#[allow(dead_code)]
pub fn structure(gazette_id: &str, ministers: Vec<Minister>) -> GovernmentStructure {
    ministers
        .into_iter()
        .fold(GovernmentStructure::new(gazette_id), |s, m| s.with_minister(m))
}

/// A department raw entity introduced by `gazette_id`
#[allow(dead_code)]
pub fn department_added_by(name: &str, gazette_id: &str) -> RawEntity {
    RawEntity::new(
        EntityKind::Department,
        EntityRecord::named(name)
            .with_added_by(gazette_id)
            .with_is_active(true),
    )
}

/// Minimal well-formed snapshot JSON
#[allow(dead_code)]
pub fn snapshot_json(gazette_id: &str, ministers: Value) -> Value {
    json!({
        "gazetteId": gazette_id,
        "ministers": ministers,
    })
}

/// Serialize a JSON value to bytes
#[allow(dead_code)]
pub fn to_bytes(v: &Value) -> Vec<u8> {
    serde_json::to_vec(v).unwrap()
}
