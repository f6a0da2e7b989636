//! Amendment operation types, in the snake_case shape the extractor emits.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::structure::deserialize_ordinal;

/// Decode an item list leniently
///
/// Items may be strings or numbers (section numbers such as `18`). Other
/// item shapes are dropped, and a value that is not an array (an UPDATE's
/// `added_content` is sometimes an object) decodes as empty.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

/// Kind of change an operation makes to its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmendmentOperation {
    Insertion,
    Deletion,
    Update,
    /// Any operation type this applier does not understand
    #[serde(other)]
    Unsupported,
}

/// Schedule column an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmendmentColumn {
    /// Column 1
    Functions,
    /// Column 2
    Departments,
    /// Column 3
    Laws,
}

impl AmendmentColumn {
    /// Resolve a column number as written in the gazette (`"1"`, `"02"`, `3`...)
    pub fn from_column_no(column_no: &str) -> Option<Self> {
        match column_no.trim().parse::<u32>().ok()? {
            1 => Some(Self::Functions),
            2 => Some(Self::Departments),
            3 => Some(Self::Laws),
            _ => None,
        }
    }
}

/// Payload of one operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AmendmentDetails {
    /// Ministry the operation targets, matched by name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_ordinal",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_no: Option<String>,

    #[serde(default, deserialize_with = "deserialize_items")]
    pub added_content: Vec<String>,

    /// Fragments; any column item containing one of these is removed
    #[serde(default, deserialize_with = "deserialize_items")]
    pub deleted_sections: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_items")]
    pub substituted_items: Vec<String>,
}

/// One operation from an amendment gazette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendmentChange {
    pub operation_type: AmendmentOperation,
    #[serde(default)]
    pub details: AmendmentDetails,
}

impl AmendmentChange {
    pub fn new(operation_type: AmendmentOperation, details: AmendmentDetails) -> Self {
        Self {
            operation_type,
            details,
        }
    }

    /// Addressed column, if the column number is recognised
    pub fn column(&self) -> Option<AmendmentColumn> {
        self.details
            .column_no
            .as_deref()
            .and_then(AmendmentColumn::from_column_no)
    }
}

impl AmendmentDetails {
    /// Details targeting `name` in `column_no`
    pub fn for_ministry(name: impl Into<String>, column_no: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            column_no: Some(column_no.into()),
            ..Self::default()
        }
    }

    pub fn with_added_content<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.added_content = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deleted_sections<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deleted_sections = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_substituted_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.substituted_items = items.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_extractor_shape() {
        let change: AmendmentChange = serde_json::from_value(json!({
            "operation_type": "DELETION",
            "details": {
                "name": "Minister of Finance",
                "column_no": 2,
                "deleted_sections": ["Excise"]
            }
        }))
        .unwrap();

        assert_eq!(change.operation_type, AmendmentOperation::Deletion);
        assert_eq!(change.column(), Some(AmendmentColumn::Departments));
        assert_eq!(change.details.deleted_sections, vec!["Excise".to_string()]);
    }

    #[test]
    fn test_item_lists_accept_numbers_and_ignore_objects() {
        let change: AmendmentChange = serde_json::from_value(json!({
            "operation_type": "UPDATE",
            "details": {
                "name": "Minister of Finance",
                "column_no": "3",
                "added_content": {"18": "Finance Act"},
                "deleted_sections": [18, "Excise", null],
                "substituted_items": ["Finance Act"]
            }
        }))
        .unwrap();

        assert!(change.details.added_content.is_empty());
        assert_eq!(
            change.details.deleted_sections,
            vec!["18".to_string(), "Excise".to_string()]
        );
        assert_eq!(change.details.substituted_items, vec!["Finance Act".to_string()]);
    }

    #[test]
    fn test_unknown_operation_type_is_unsupported() {
        let change: AmendmentChange =
            serde_json::from_value(json!({"operation_type": "RENUMBERING"})).unwrap();
        assert_eq!(change.operation_type, AmendmentOperation::Unsupported);
        assert_eq!(change.column(), None);
    }

    #[test]
    fn test_column_numbers() {
        assert_eq!(AmendmentColumn::from_column_no("1"), Some(AmendmentColumn::Functions));
        assert_eq!(AmendmentColumn::from_column_no("03"), Some(AmendmentColumn::Laws));
        assert_eq!(AmendmentColumn::from_column_no("4"), None);
        assert_eq!(AmendmentColumn::from_column_no("II"), None);
    }
}
