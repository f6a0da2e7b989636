//! Apply command
//!
//! Usage: gazette apply <BASE> <CHANGES> --gazette-id <ID> [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

use gazette_core::amendment::{apply_amendment, parse_amendment_changes};
use gazette_core::snapshot::parse_structure_bytes;
use gazette_core_types::RequestContext;

use super::{read_input, render_json, write_output};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Base snapshot JSON file
    pub base: PathBuf,

    /// Amendment operations JSON file (array, or object with `changes`)
    pub changes: PathBuf,

    /// Gazette id for the resulting structure
    #[arg(long)]
    pub gazette_id: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute apply command
pub fn execute(args: ApplyArgs, ctx: &RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let base = parse_structure_bytes(&read_input(&args.base, ctx)?).map_err(|e| e.with_context(ctx))?;
    let changes =
        parse_amendment_changes(&read_input(&args.changes, ctx)?).map_err(|e| e.with_context(ctx))?;

    let amended = apply_amendment(&base, &args.gazette_id, &changes);

    let json = render_json(&amended, ctx)?;
    write_output(args.output.as_ref(), &json, ctx)?;
    Ok(())
}
