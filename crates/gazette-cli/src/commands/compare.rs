//! Compare command
//!
//! Usage: gazette compare <BASE> <AMENDMENT> [--summary] [--alignment] [--no-reconcile] [--output <FILE>]

use clap::Args;
use std::path::PathBuf;

use gazette_core::diff::{compare_json_bytes, render_human_summary, CompareOptions};
use gazette_core_types::RequestContext;

use super::{read_input, render_json, write_output};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Base snapshot JSON file
    pub base: PathBuf,

    /// Amendment snapshot JSON file
    pub amendment: PathBuf,

    /// Print a Markdown summary instead of JSON
    #[arg(long)]
    pub summary: bool,

    /// Attach side-by-side alignment rows to modified ministries
    #[arg(long)]
    pub alignment: bool,

    /// Skip the raw-entity reconciliation pass
    #[arg(long)]
    pub no_reconcile: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs, ctx: &RequestContext) -> Result<(), Box<dyn std::error::Error>> {
    let base = read_input(&args.base, ctx)?;
    let amendment = read_input(&args.amendment, ctx)?;

    let options = CompareOptions::default()
        .with_reconciliation(!args.no_reconcile)
        .with_alignment(args.alignment);

    let comparison =
        compare_json_bytes(&base, &amendment, &options).map_err(|e| e.with_context(ctx))?;
    tracing::debug!(
        base_gazette_id = comparison.base_gazette_id.as_str(),
        amendment_gazette_id = comparison.amendment_gazette_id.as_str(),
        change_count = comparison.changes.change_count(),
        "comparison complete"
    );

    let rendered = if args.summary {
        render_human_summary(&comparison.changes)
    } else {
        render_json(&comparison, ctx)?
    };

    write_output(args.output.as_ref(), &rendered, ctx)?;
    Ok(())
}
