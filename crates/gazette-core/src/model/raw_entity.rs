//! Raw entity records
//!
//! Graph exports attach loosely shaped records to each gazette: a list of
//! labels plus a property bag. They are decoded exactly once, here, into a
//! closed [`RawEntity`] variant so the reconciliation pass can match on kind
//! instead of inspecting label strings at every use.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recognised entity kinds, by label suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Minister,
    Department,
    Function,
    Law,
}

impl EntityKind {
    /// Classification priority when several labels match
    const PRIORITY: [EntityKind; 4] = [
        EntityKind::Minister,
        EntityKind::Department,
        EntityKind::Function,
        EntityKind::Law,
    ];

    fn suffix(self) -> &'static str {
        match self {
            EntityKind::Minister => "Minister",
            EntityKind::Department => "Department",
            EntityKind::Function => "Function",
            EntityKind::Law => "Law",
        }
    }

    /// Classify a label list (`["AmendmentDepartment"]` → `Department`)
    ///
    /// Returns `None` when no label ends in a recognised suffix.
    pub fn from_labels(labels: &[String]) -> Option<EntityKind> {
        Self::PRIORITY
            .into_iter()
            .find(|kind| labels.iter().any(|l| l.ends_with(kind.suffix())))
    }
}

/// Wire shape of a raw entity: `{ labels, properties, name? }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawEntityRecord {
    #[serde(default)]
    pub labels: Vec<String>,

    /// Display name some exports copy to the top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Decoded properties of a recognised raw entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityRecord {
    pub labels: Vec<String>,
    pub name: Option<String>,
    pub number: Option<String>,
    /// Gazette id that introduced this entity
    pub added_by: Option<String>,
    /// Gazette id that retired this entity
    pub removed_by: Option<String>,
    pub is_active: Option<bool>,
    /// Properties not interpreted by the engine, kept for re-serialization
    pub extra: Map<String, Value>,
}

impl EntityRecord {
    /// Create a record with a name and no provenance
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_added_by(mut self, gazette_id: impl Into<String>) -> Self {
        self.added_by = Some(gazette_id.into());
        self
    }

    pub fn with_removed_by(mut self, gazette_id: impl Into<String>) -> Self {
        self.removed_by = Some(gazette_id.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// A raw entity, tagged by recognised kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntityRecord", into = "RawEntityRecord")]
pub enum RawEntity {
    Minister(EntityRecord),
    Department(EntityRecord),
    Function(EntityRecord),
    Law(EntityRecord),
    /// No label matched; kept verbatim and ignored by reconciliation
    Unknown(RawEntityRecord),
}

impl RawEntity {
    /// Wrap a decoded record under the given kind
    ///
    /// If the record carries no labels, the kind's canonical label is added
    /// so that the entity re-serializes with the same classification.
    pub fn new(kind: EntityKind, mut record: EntityRecord) -> Self {
        if record.labels.is_empty() {
            record.labels.push(kind.suffix().to_string());
        }
        match kind {
            EntityKind::Minister => RawEntity::Minister(record),
            EntityKind::Department => RawEntity::Department(record),
            EntityKind::Function => RawEntity::Function(record),
            EntityKind::Law => RawEntity::Law(record),
        }
    }

    /// Recognised kind, or `None` for [`RawEntity::Unknown`]
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            RawEntity::Minister(_) => Some(EntityKind::Minister),
            RawEntity::Department(_) => Some(EntityKind::Department),
            RawEntity::Function(_) => Some(EntityKind::Function),
            RawEntity::Law(_) => Some(EntityKind::Law),
            RawEntity::Unknown(_) => None,
        }
    }

    /// Decoded record, or `None` for [`RawEntity::Unknown`]
    pub fn record(&self) -> Option<&EntityRecord> {
        match self {
            RawEntity::Minister(r)
            | RawEntity::Department(r)
            | RawEntity::Function(r)
            | RawEntity::Law(r) => Some(r),
            RawEntity::Unknown(_) => None,
        }
    }
}

const PROP_NAME: &str = "name";
const PROP_NUMBER: &str = "number";
const PROP_ADDED_BY: &str = "added_by";
const PROP_REMOVED_BY: &str = "removed_by";
const PROP_IS_ACTIVE: &str = "is_active";

/// Remove `key` from `props` if `decode` accepts its value; otherwise leave it in place
fn take_prop<T>(
    props: &mut Map<String, Value>,
    key: &str,
    decode: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let decoded = props.get(key).and_then(&decode)?;
    props.remove(key);
    Some(decoded)
}

fn as_text(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn as_ordinal(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    }
}

impl From<RawEntityRecord> for RawEntity {
    fn from(raw: RawEntityRecord) -> Self {
        let Some(kind) = EntityKind::from_labels(&raw.labels) else {
            return RawEntity::Unknown(raw);
        };

        let mut props = raw.properties;
        let name = take_prop(&mut props, PROP_NAME, as_text).or(raw.name);
        let number = take_prop(&mut props, PROP_NUMBER, as_ordinal);
        let added_by = take_prop(&mut props, PROP_ADDED_BY, as_text);
        let removed_by = take_prop(&mut props, PROP_REMOVED_BY, as_text);
        let is_active = take_prop(&mut props, PROP_IS_ACTIVE, Value::as_bool);

        RawEntity::new(
            kind,
            EntityRecord {
                labels: raw.labels,
                name,
                number,
                added_by,
                removed_by,
                is_active,
                extra: props,
            },
        )
    }
}

impl From<RawEntity> for RawEntityRecord {
    fn from(entity: RawEntity) -> Self {
        let record = match entity {
            RawEntity::Unknown(raw) => return raw,
            RawEntity::Minister(r)
            | RawEntity::Department(r)
            | RawEntity::Function(r)
            | RawEntity::Law(r) => r,
        };

        let mut properties = record.extra;
        if let Some(name) = record.name {
            properties.insert(PROP_NAME.to_string(), Value::String(name));
        }
        if let Some(number) = record.number {
            properties.insert(PROP_NUMBER.to_string(), Value::String(number));
        }
        if let Some(added_by) = record.added_by {
            properties.insert(PROP_ADDED_BY.to_string(), Value::String(added_by));
        }
        if let Some(removed_by) = record.removed_by {
            properties.insert(PROP_REMOVED_BY.to_string(), Value::String(removed_by));
        }
        if let Some(is_active) = record.is_active {
            properties.insert(PROP_IS_ACTIVE.to_string(), Value::Bool(is_active));
        }

        RawEntityRecord {
            labels: record.labels,
            name: None,
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(v: Value) -> RawEntity {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_label_suffix_classification() {
        let labels = |ls: &[&str]| ls.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            EntityKind::from_labels(&labels(&["AmendmentDepartment"])),
            Some(EntityKind::Department)
        );
        assert_eq!(
            EntityKind::from_labels(&labels(&["BaseLaw"])),
            Some(EntityKind::Law)
        );
        assert_eq!(
            EntityKind::from_labels(&labels(&["BaseGazette"])),
            None
        );
        // Minister wins over Department when both are present
        assert_eq!(
            EntityKind::from_labels(&labels(&["Department", "BaseMinister"])),
            Some(EntityKind::Minister)
        );
    }

    #[test]
    fn test_decode_department_with_provenance() {
        let entity = decode(json!({
            "labels": ["Department"],
            "properties": {"name": "Irrigation", "added_by": "2412/08", "is_active": true}
        }));

        assert_eq!(entity.kind(), Some(EntityKind::Department));
        let record = entity.record().unwrap();
        assert_eq!(record.name.as_deref(), Some("Irrigation"));
        assert_eq!(record.added_by.as_deref(), Some("2412/08"));
        assert_eq!(record.is_active, Some(true));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_decode_falls_back_to_top_level_name() {
        let entity = decode(json!({
            "name": "Ministry of Health",
            "labels": ["AmendmentMinister"],
            "properties": {"number": 7}
        }));

        let record = entity.record().unwrap();
        assert_eq!(record.name.as_deref(), Some("Ministry of Health"));
        assert_eq!(record.number.as_deref(), Some("7"));
    }

    #[test]
    fn test_non_boolean_is_active_is_absent_signal() {
        let entity = decode(json!({
            "labels": ["Law"],
            "properties": {"name": "Excise Ordinance", "is_active": "false"}
        }));

        let record = entity.record().unwrap();
        assert_eq!(record.is_active, None);
        assert_eq!(record.extra.get("is_active"), Some(&json!("false")));
    }

    #[test]
    fn test_unknown_labels_preserved_verbatim() {
        let raw = json!({
            "labels": ["BaseGazette"],
            "properties": {"gazette_id": "2289/43"}
        });
        let entity = decode(raw.clone());
        assert_eq!(entity.kind(), None);
        assert!(entity.record().is_none());
        assert_eq!(serde_json::to_value(&entity).unwrap(), raw);
    }

    #[test]
    fn test_reserialize_keeps_extra_properties() {
        let entity = decode(json!({
            "labels": ["Department"],
            "properties": {"name": "Irrigation", "item_number": "3"}
        }));
        let v = serde_json::to_value(&entity).unwrap();
        assert_eq!(v["properties"]["item_number"], "3");
        assert_eq!(v["properties"]["name"], "Irrigation");
    }

    #[test]
    fn test_new_adds_canonical_label() {
        let entity = RawEntity::new(EntityKind::Function, EntityRecord::named("Policy"));
        assert_eq!(entity.record().unwrap().labels, vec!["Function".to_string()]);
    }
}
