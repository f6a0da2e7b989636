//! Gazette CLI
//!
//! Command-line interface for the government structure delta engine

use clap::{Parser, Subcommand, ValueEnum};
use gazette_core::logging_facility::{init, Profile};
use gazette_core_types::{RequestContext, TraceId};

mod commands;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gazette")]
#[command(about = "Gazette - Government structure comparison", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Trace id forwarded from an upstream caller
    #[arg(long, global = true)]
    trace_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two structure snapshots
    Compare(commands::compare::CompareArgs),
    /// Apply amendment operations to a base structure
    Apply(commands::apply::ApplyArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let ctx = RequestContext::for_invocation(cli.trace_id);
    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str)
    );
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, &ctx),
        Commands::Apply(args) => commands::apply::execute(args, &ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
