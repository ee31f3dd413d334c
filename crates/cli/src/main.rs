//! callaudit - analyze a call transcript JSON file and print the report

use anyhow::{Context, Result};
use callaudit_analysis_core::{analyze_call, analyze_overtalk_merged, parse_transcript};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "callaudit",
    version,
    about = "Compliance and quality analysis for call transcripts",
    long_about = "Reads a transcript JSON file (an array of objects with \
                  speaker/text/stime/etime fields), runs the analysis engine \
                  and prints the JSON report to stdout."
)]
struct Args {
    /// Path to the transcript JSON file
    transcript: PathBuf,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Report merged-interval overtalk seconds instead of the default
    /// pairwise sum (which can exceed 100% of the call)
    #[arg(long)]
    merged_overtalk: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let json = fs::read_to_string(&args.transcript)
        .with_context(|| format!("failed to read {}", args.transcript.display()))?;

    let transcript = parse_transcript(&json)
        .with_context(|| format!("failed to parse {}", args.transcript.display()))?;
    debug!(utterances = transcript.len(), "transcript loaded");

    let mut report = analyze_call(&transcript)?;
    if args.merged_overtalk {
        report.quality_metrics.overtalk = analyze_overtalk_merged(&transcript);
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
