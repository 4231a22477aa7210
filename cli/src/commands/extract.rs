use anyhow::Result;
use carve::process::{carve_file, scan_file};
use carve::{CarveOptions, CarveReport, DEFAULT_BUFFER_SIZE, DEFAULT_PREFIX, WriteMode};
use clap::Args;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ExtractArgs {
    /// Input container file
    #[arg(default_value = "sample.pak")]
    input: PathBuf,
    /// Output directory (defaults to the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output file name prefix, files are named <prefix><n>.wav
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,
    /// Payload copy buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,
    /// Reopen the output file for every buffer instead of holding it open
    #[arg(long)]
    per_write: bool,
    /// Scan and report without writing any files
    #[arg(long)]
    dry_run: bool,
    /// Write a JSON report of the extracted streams
    #[arg(long)]
    report: Option<PathBuf>,
}

pub fn handle(args: ExtractArgs) -> Result<()> {
    let options = CarveOptions {
        buffer_size: args.buffer_size,
        write_mode: if args.per_write {
            WriteMode::PerWrite
        } else {
            WriteMode::Scoped
        },
        prefix: args.prefix,
    };

    let report = if args.dry_run {
        scan_file(&args.input, &options)?
    } else {
        let out_dir = match &args.output {
            Some(p) => p.clone(),
            None => PathBuf::from("."),
        };
        carve_file(&args.input, &out_dir, &options)?
    };

    print_summary(&report);

    if let Some(path) = &args.report {
        write_report(path, &report)?;
    }
    Ok(())
}

fn print_summary(report: &CarveReport) {
    for extraction in &report.extractions {
        info!(
            "#{} at {:#x}: {} ({} of {} payload bytes)",
            extraction.index,
            extraction.offset,
            extraction.destination,
            extraction.bytes_copied,
            extraction.declared_length
        );
    }
    for extraction in report.truncated() {
        warn!(
            "{} is truncated: source ended {} bytes short",
            extraction.destination,
            extraction.declared_length as u64 - extraction.bytes_copied
        );
    }
    if report.unterminated_header {
        warn!("Source ended inside a RIFF header, nothing extracted for it");
    }
    info!(
        "{} stream(s), {} payload bytes, {} bytes scanned",
        report.extractions.len(),
        report.payload_bytes(),
        report.bytes_scanned
    );
}

fn write_report(path: &Path, report: &CarveReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Wrote report to {:?}", path);
    Ok(())
}
