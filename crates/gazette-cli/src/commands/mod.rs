pub mod apply;
pub mod compare;

use serde::Serialize;
use std::path::{Path, PathBuf};

use gazette_core::{ExError, ExErrorKind, GazetteError};
use gazette_core_types::RequestContext;

/// Read an input file, reporting failures as `Io` errors
pub fn read_input(path: &Path, ctx: &RequestContext) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_input")
            .with_context(ctx)
            .with_message(format!("failed to read {}: {}", path.display(), e))
    })
}

/// Pretty-print `value` as JSON with a trailing newline
pub fn render_json<T: Serialize + ?Sized>(value: &T, ctx: &RequestContext) -> Result<String, ExError> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        ExError::from(GazetteError::from(e))
            .with_op("render_output")
            .with_context(ctx)
    })?;
    json.push('\n');
    Ok(json)
}

/// Write to `output`, or stdout when no path is given
pub fn write_output(output: Option<&PathBuf>, content: &str, ctx: &RequestContext) -> Result<(), ExError> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("write_output")
                    .with_context(ctx)
                    .with_message(format!("failed to write {}: {}", path.display(), e))
            })?;
            println!("✓ Written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
