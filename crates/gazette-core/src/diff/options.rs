//! Comparison options.

use serde::{Deserialize, Serialize};

/// Knobs for a single comparison request
///
/// Deserializes from a partial document; absent fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// Fold provenance-flagged raw entities into the result (default: on)
    pub reconcile_raw_entities: bool,
    /// Attach alignment rows to every modified ministry (default: off)
    pub include_alignment: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            reconcile_raw_entities: true,
            include_alignment: false,
        }
    }
}

impl CompareOptions {
    pub fn with_reconciliation(mut self, enabled: bool) -> Self {
        self.reconcile_raw_entities = enabled;
        self
    }

    pub fn with_alignment(mut self, enabled: bool) -> Self {
        self.include_alignment = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CompareOptions::default();
        assert!(opts.reconcile_raw_entities);
        assert!(!opts.include_alignment);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let opts: CompareOptions =
            serde_json::from_str(r#"{"includeAlignment": true}"#).unwrap();
        assert!(opts.reconcile_raw_entities);
        assert!(opts.include_alignment);
    }
}
