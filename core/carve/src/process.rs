use crate::carver::WavCarver;
use crate::error::{CarveError, Result};
use crate::sink::{DirectorySink, DiscardSink};
use crate::types::{CarveOptions, CarveReport};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open_source(input: &Path) -> Result<BufReader<File>> {
    let file = File::open(input).map_err(|source| CarveError::SourceOpen {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Carve every embedded WAVE stream of `input` into `output_dir`.
pub fn carve_file(input: &Path, output_dir: &Path, options: &CarveOptions) -> Result<CarveReport> {
    let reader = open_source(input)?;
    let mut sink = DirectorySink::new(output_dir, options.prefix.as_str(), options.write_mode);
    let mut carver = WavCarver::new(options)?;

    let report = carver.carve(reader, &mut sink)?;
    info!(
        "Extracted {} wav file(s) from {:?} into {:?} ({} bytes scanned)",
        report.extractions.len(),
        input,
        output_dir,
        report.bytes_scanned
    );
    Ok(report)
}

/// Scan `input` and report what would be extracted, without creating files.
pub fn scan_file(input: &Path, options: &CarveOptions) -> Result<CarveReport> {
    let reader = open_source(input)?;
    let mut sink = DiscardSink::new(options.prefix.as_str());
    let mut carver = WavCarver::new(options)?;

    let report = carver.carve(reader, &mut sink)?;
    info!(
        "Found {} wav stream(s) in {:?} ({} bytes scanned)",
        report.extractions.len(),
        input,
        report.bytes_scanned
    );
    Ok(report)
}
