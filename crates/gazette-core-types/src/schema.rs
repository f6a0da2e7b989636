//! Canonical schema constants for structured logging and events
//!
//! Every log line emitted by the engine and the CLI uses these keys so that
//! JSON output from the production profile stays queryable.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Gazette identifiers
pub const FIELD_GAZETTE_ID: &str = "gazette_id";
pub const FIELD_BASE_GAZETTE_ID: &str = "base_gazette_id";
pub const FIELD_AMENDMENT_GAZETTE_ID: &str = "amendment_gazette_id";
pub const FIELD_MINISTER_KEY: &str = "minister_key";

// Collection sizes
pub const FIELD_MINISTER_COUNT: &str = "minister_count";
pub const FIELD_RAW_ENTITY_COUNT: &str = "raw_entity_count";
pub const FIELD_CHANGE_COUNT: &str = "change_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_FIELD: &str = "err.field";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_GAZETTE_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
        assert!(FIELD_ERR_FIELD.starts_with("err."));
        assert!(FIELD_ERR_MESSAGE.starts_with("err."));
    }
}
