//! `validate-address-map` — Checks a Modbus address map for overlapping assignments.
//!
//! Expands pose, tick and queue bases into word ranges, then reports overlaps
//! among used ranges, among reserved ranges, and between the two, for each of
//! the four address spaces.
//!
//! **Usage:**
//! ```
//! validate-address-map AddressMap.json [--max-queue N] [--strict] [--gaps] [--format json]
//! ```
//!
//! Exits 0 when no conflicts are found and 2 on any conflict or fatal input
//! error. Warnings alone never change the exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use addrmap_conformance::{validate_file, Options, Severity, ValidationReport};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for conflicts and fatal errors.
const FAILURE: u8 = 2;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Prefixed diagnostic lines and a summary block.
    Text,
    /// The full report as pretty-printed JSON on stdout.
    Json,
}

/// Validate a Modbus address map for overlapping address assignments.
#[derive(Parser)]
#[command(
    name = "validate-address-map",
    about = "Validate a Modbus address map for overlapping address assignments"
)]
struct Args {
    /// Path to AddressMap.json.
    json_path: PathBuf,

    /// Expand TARGET_QUEUE_BASE for N targets (default: 0 = do not expand).
    #[arg(long, default_value_t = 0)]
    max_queue: u32,

    /// Treat the open-ended queue warning as an error.
    #[arg(long)]
    strict: bool,

    /// Also report unused holes between used ranges.
    #[arg(long)]
    gaps: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[ERROR] {:#}", err);
            ExitCode::from(FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let options = Options {
        max_queue: args.max_queue,
        strict: args.strict,
        report_gaps: args.gaps,
    };
    debug!(path = %args.json_path.display(), ?options, "validating address map");

    let report = validate_file(&args.json_path, &options)?;

    match args.format {
        Format::Text => print_text(&report),
        Format::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize report to JSON")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::from(report.exit_code()))
}

fn print_text(report: &ValidationReport) {
    for finding in report.with_severity(Severity::Conflict) {
        println!();
        if finding.details.is_empty() {
            println!("[CONFLICT] {}", finding.message);
        } else {
            println!("[CONFLICT] {}:", finding.message);
            for detail in &finding.details {
                println!("  {}", detail);
            }
        }
    }

    for finding in report.with_severity(Severity::Info) {
        println!("[INFO] {}", finding.message);
        for detail in &finding.details {
            println!("  {}", detail);
        }
    }

    println!();
    println!("=== SUMMARY ===");
    for summary in &report.summaries {
        let span = match (summary.min, summary.max) {
            (Some(min), Some(max)) => format!(" from {} to {}", min, max),
            _ => String::new(),
        };
        println!(
            "- {}: {} used range(s){} | {} reserved range(s)",
            summary.space, summary.used, span, summary.reserved
        );
    }

    for finding in report.with_severity(Severity::Warning) {
        eprintln!("[WARN] {}", finding.message);
    }

    let conflicts = report.conflict_count();
    if conflicts > 0 {
        eprintln!("[ERROR] {} conflict group(s) found.", conflicts);
    } else {
        println!("[INFO] No conflicts found. AddressMap looks good.");
    }
}
