//! Request correlation ids.
//!
//! One CLI invocation is one request. Its [`RequestContext`] is attached to
//! every error the invocation reports and to the `request` span wrapping its
//! log events, so a failure printed on stderr can be matched to its log lines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh time-ordered id (UUIDv7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an id issued elsewhere; the value is kept verbatim
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifies one `compare` or `apply` invocation
    RequestId
);

correlation_id!(
    /// Id forwarded by an upstream caller (`--trace-id`)
    TraceId
);

/// Correlation ids for one request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    /// Context with a freshly generated request id and no trace id
    pub fn new() -> Self {
        Self::with_request_id(RequestId::new())
    }

    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Context for a new invocation, adopting the caller's trace id
    ///
    /// A blank trace id is ignored.
    pub fn for_invocation(trace_id: Option<String>) -> Self {
        let ctx = Self::new();
        match trace_id.filter(|t| !t.trim().is_empty()) {
            Some(t) => ctx.with_trace_id(TraceId::from_string(t)),
            None => ctx,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
