use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use super::raw_entity::RawEntity;
use crate::diff::key::normalize_key;

/// Sentinel ordinal meaning "number absent"
pub const UNKNOWN_NUMBER: &str = "Unknown";

/// Minister - a cabinet-level organisational unit
///
/// A ministry owns a set of departments, a set of laws it administers and a
/// set of functions. Child names are compared byte-for-byte; no case or
/// whitespace folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minister {
    /// Ordinal as printed in the gazette (`"Unknown"` or absent when not printed)
    #[serde(
        default,
        deserialize_with = "deserialize_ordinal",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,

    /// Ministry name (required, non-empty)
    pub name: String,

    #[serde(default)]
    pub departments: BTreeSet<String>,

    #[serde(default)]
    pub laws: BTreeSet<String>,

    #[serde(default)]
    pub functions: BTreeSet<String>,
}

impl Minister {
    /// Create a ministry with no children
    pub fn new(number: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            number: number.map(str::to_string),
            name: name.into(),
            departments: BTreeSet::new(),
            laws: BTreeSet::new(),
            functions: BTreeSet::new(),
        }
    }

    /// Replace the department set
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the law set
    pub fn with_laws<I, S>(mut self, laws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.laws = laws.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the function set
    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = functions.into_iter().map(Into::into).collect();
        self
    }

    /// Ordinal with the `"Unknown"` sentinel and blank values treated as absent
    pub fn effective_number(&self) -> Option<&str> {
        effective_number(self.number.as_deref())
    }

    /// Composite key used to match this ministry across snapshots
    pub fn key(&self) -> String {
        normalize_key(self.number.as_deref(), &self.name)
    }
}

/// Normalise an ordinal as written in a gazette
///
/// Surrounding whitespace is stripped, so extractor output such as `" 3"`
/// matches `"3"`. The `"Unknown"` sentinel and blank strings mean "no ordinal".
pub(crate) fn effective_number(number: Option<&str>) -> Option<&str> {
    number
        .map(str::trim)
        .filter(|n| !n.is_empty() && *n != UNKNOWN_NUMBER)
}

/// GovernmentStructure - one gazette's view of the government
///
/// `ministers` keeps gazette order. Standalone `departments`/`laws`/`functions`
/// are those not attached to any ministry. `raw_entities` are consulted only
/// by the reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentStructure {
    #[serde(alias = "gazette_id")]
    pub gazette_id: String,

    pub ministers: Vec<Minister>,

    #[serde(default)]
    pub departments: BTreeSet<String>,

    #[serde(default)]
    pub laws: BTreeSet<String>,

    #[serde(default)]
    pub functions: BTreeSet<String>,

    #[serde(default, alias = "raw_entities")]
    pub raw_entities: Vec<RawEntity>,
}

impl GovernmentStructure {
    /// Create an empty (but well-formed) structure for a gazette
    pub fn new(gazette_id: impl Into<String>) -> Self {
        Self {
            gazette_id: gazette_id.into(),
            ministers: Vec::new(),
            departments: BTreeSet::new(),
            laws: BTreeSet::new(),
            functions: BTreeSet::new(),
            raw_entities: Vec::new(),
        }
    }

    /// Append a ministry, keeping gazette order
    pub fn with_minister(mut self, minister: Minister) -> Self {
        self.ministers.push(minister);
        self
    }

    /// Replace the standalone department set
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the standalone law set
    pub fn with_laws<I, S>(mut self, laws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.laws = laws.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the standalone function set
    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = functions.into_iter().map(Into::into).collect();
        self
    }

    /// Append a raw entity record
    pub fn with_raw_entity(mut self, entity: RawEntity) -> Self {
        self.raw_entities.push(entity);
        self
    }

    /// Find a ministry by its composite key
    pub fn minister_by_key(&self, key: &str) -> Option<&Minister> {
        self.ministers.iter().find(|m| m.key() == key)
    }
}

/// Accept an ordinal as a JSON string or integer
///
/// Gazette extractors emit `"04"`, graph exports sometimes emit `4`.
pub(crate) fn deserialize_ordinal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ordinal {
        Text(String),
        Int(u64),
    }

    Ok(Option::<Ordinal>::deserialize(deserializer)?.map(|o| match o {
        Ordinal::Text(s) => s,
        Ordinal::Int(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minister_builders() {
        let m = Minister::new(Some("01"), "Finance")
            .with_departments(["Treasury", "Customs"])
            .with_laws(["Finance Act"]);

        assert_eq!(m.name, "Finance");
        assert_eq!(m.departments.len(), 2);
        assert!(m.functions.is_empty());
        assert_eq!(m.key(), "01-Finance");
    }

    #[test]
    fn test_effective_number_filters_sentinel_and_blank() {
        assert_eq!(
            Minister::new(Some("Unknown"), "Health").effective_number(),
            None
        );
        assert_eq!(Minister::new(Some("  "), "Health").effective_number(), None);
        assert_eq!(Minister::new(None, "Health").effective_number(), None);
        assert_eq!(
            Minister::new(Some("07"), "Health").effective_number(),
            Some("07")
        );
    }

    #[test]
    fn test_minister_accepts_integer_number() {
        let m: Minister = serde_json::from_value(json!({"number": 4, "name": "Defence"})).unwrap();
        assert_eq!(m.number.as_deref(), Some("4"));
        assert_eq!(m.key(), "04-Defence");
    }

    #[test]
    fn test_structure_accepts_snake_case_aliases() {
        let s: GovernmentStructure = serde_json::from_value(json!({
            "gazette_id": "2289/43",
            "ministers": [],
            "raw_entities": []
        }))
        .unwrap();
        assert_eq!(s.gazette_id, "2289/43");
    }

    #[test]
    fn test_structure_serializes_camel_case() {
        let s = GovernmentStructure::new("2289/43");
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["gazetteId"], "2289/43");
        assert!(v.get("rawEntities").is_some());
    }
}
