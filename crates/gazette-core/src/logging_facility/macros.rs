//! Operation lifecycle macros.
//!
//! Every engine entry point brackets its work with a `start` event and either
//! an `end` or an `end_error` event. All three carry `component` (the calling
//! module) and `op`, so one operation's events can be filtered out of a mixed
//! stream. Field names come from `gazette_core_types::schema`.

/// Emit one lifecycle event at `$level`; shared by the public macros below
#[doc(hidden)]
#[macro_export]
macro_rules! __gazette_op_event {
    ($level:ident, $event:expr, $op:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Record that an operation has begun
///
/// Extra `key = value` pairs are passed through to `tracing` unchanged.
///
/// ```
/// # use gazette_core::log_op_start;
/// log_op_start!("apply_amendment");
/// log_op_start!("apply_amendment", base_gazette_id = "2289/43", change_count = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__gazette_op_event!(
            info,
            gazette_core_types::schema::EVENT_START,
            $op
            $(, $($field)*)?
        )
    };
}

/// Record that an operation finished; `duration_ms` is required
///
/// ```
/// # use gazette_core::log_op_end;
/// log_op_end!("reconcile_raw_entities", duration_ms = 3, change_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__gazette_op_event!(
            info,
            gazette_core_types::schema::EVENT_END,
            $op,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Record that an operation failed
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError).
/// The event carries the error's kind, stable code, message and, when set,
/// the offending field.
///
/// ```
/// # use gazette_core::{log_op_error, errors::GazetteError};
/// let err = GazetteError::DuplicateMinisterKey {
///     gazette_id: "2289/43".to_string(),
///     key: "03-Minister of Health".to_string(),
/// };
/// log_op_error!("parse_structure", err, duration_ms = 0, byte_len = 512);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__gazette_op_event!(
            error,
            gazette_core_types::schema::EVENT_END_ERROR,
            $op,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.field = ex_err.field(),
            err.message = ex_err.message()
            $(, $($field)*)?
        );
    }};
}
