use gazette_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

/// Result type alias using GazetteError
pub type Result<T> = std::result::Result<T, GazetteError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The comparison itself never fails; these kinds classify what can go wrong
/// at the boundary (decoding snapshots, reading files in the CLI). Each kind
/// maps to a stable code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Snapshot input does not have the shape of a government structure
    InvalidSnapshot,
    /// Caller-supplied argument is unusable (e.g. malformed amendment operations)
    InvalidInput,
    /// Assembled result failed its serialization round-trip
    DeterminismViolation,

    // Integration/IO
    Io,
    /// Output could not be encoded
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus enough
/// context (gazette, ministry key, offending field) to correct and resubmit.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    gazette_id: Option<String>,
    minister_key: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            gazette_id: None,
            minister_key: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add gazette ID context
    pub fn with_gazette_id(mut self, id: impl Into<String>) -> Self {
        self.gazette_id = Some(id.into());
        self
    }

    /// Add composite ministry key context
    pub fn with_minister_key(mut self, key: impl Into<String>) -> Self {
        self.minister_key = Some(key.into());
        self
    }

    /// Add offending field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach the request and trace ids of a request context
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.request_id = Some(ctx.request_id.clone());
        self.trace_id = ctx.trace_id.clone();
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the gazette ID context, if any
    pub fn gazette_id(&self) -> Option<&str> {
        self.gazette_id.as_deref()
    }

    /// Get the ministry key context, if any
    pub fn minister_key(&self) -> Option<&str> {
        self.minister_key.as_deref()
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(gazette_id) = &self.gazette_id {
            write!(f, " (gazette_id: {})", gazette_id)?;
        }
        if let Some(key) = &self.minister_key {
            write!(f, " (minister_key: {})", key)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while decoding or applying gazette data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GazetteError {
    /// A required snapshot field is absent
    #[error("Snapshot is missing required field `{field}`")]
    MissingField {
        gazette_id: Option<String>,
        field: String,
    },

    /// Snapshot input has the wrong shape
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot {
        gazette_id: Option<String>,
        reason: String,
    },

    /// A minister entry has an empty or whitespace-only name
    #[error("Minister at position {index} in gazette {gazette_id} has an empty name")]
    EmptyMinisterName { gazette_id: String, index: usize },

    /// Two ministers in one snapshot normalise to the same composite key
    #[error("Gazette {gazette_id} lists ministry {key} more than once")]
    DuplicateMinisterKey { gazette_id: String, key: String },

    /// Amendment operations document could not be decoded
    #[error("Invalid amendment operations: {reason}")]
    InvalidAmendment { reason: String },

    /// A result could not be encoded as JSON
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<GazetteError> for ExError {
    fn from(err: GazetteError) -> Self {
        let message = err.to_string();
        match err {
            GazetteError::MissingField { gazette_id, field } => {
                let ex = ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_field(field)
                    .with_message(message);
                match gazette_id {
                    Some(id) => ex.with_gazette_id(id),
                    None => ex,
                }
            }
            GazetteError::InvalidSnapshot { gazette_id, .. } => {
                let ex = ExError::new(ExErrorKind::InvalidSnapshot).with_message(message);
                match gazette_id {
                    Some(id) => ex.with_gazette_id(id),
                    None => ex,
                }
            }
            GazetteError::EmptyMinisterName { gazette_id, .. } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_gazette_id(gazette_id)
                    .with_field("ministers.name")
                    .with_message(message)
            }
            GazetteError::DuplicateMinisterKey { gazette_id, key } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_gazette_id(gazette_id)
                    .with_minister_key(key)
                    .with_message(message)
            }
            GazetteError::InvalidAmendment { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            GazetteError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for GazetteError {
    fn from(err: serde_json::Error) -> Self {
        GazetteError::Serialization {
            message: err.to_string(),
        }
    }
}
