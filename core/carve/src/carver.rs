use crate::error::{CarveError, Result};
use crate::reader::extract_header;
use crate::scanner::{Marker, SignatureScanner};
use crate::sink::OutputSink;
use crate::types::{CarveOptions, CarveReport, Extraction, HeaderScan};
use crate::writer::extract_payload;
use log::info;
use std::io::Read;
use utils::BinReadExt;

/// Single-pass driver: feeds the source to a `RIFF` scanner and hands each
/// match over to the header and payload extractors.
///
/// The output counter lives as long as the carver, so several sources carved
/// with one instance share a numbering. A new instance starts again at 0.
#[derive(Debug)]
pub struct WavCarver {
    scanner: SignatureScanner,
    files_created: usize,
    position: u64,
    buffer_size: usize,
}

impl WavCarver {
    pub fn new(options: &CarveOptions) -> Result<Self> {
        if options.buffer_size == 0 {
            return Err(CarveError::InvalidBufferSize);
        }
        Ok(Self {
            scanner: SignatureScanner::new(Marker::RIFF),
            files_created: 0,
            position: 0,
            buffer_size: options.buffer_size,
        })
    }

    pub fn files_created(&self) -> usize {
        self.files_created
    }

    /// Scan `reader` to its end, extracting every embedded stream into `sink`.
    ///
    /// Reads are one byte at a time while searching, so pass a buffered reader.
    pub fn carve<R, S>(&mut self, mut reader: R, sink: &mut S) -> Result<CarveReport>
    where
        R: Read,
        S: OutputSink + ?Sized,
    {
        self.scanner.reset();
        self.position = 0;
        let mut report = CarveReport::default();

        while let Some(byte) = reader.read_byte_opt()? {
            self.position += 1;
            if !self.scanner.feed(byte) {
                continue;
            }

            let offset = self.position - Marker::RIFF.len() as u64;
            info!("Found wav at position {}", offset);

            let header = match extract_header(&mut reader)? {
                HeaderScan::Complete(header) => header,
                HeaderScan::EndOfStream { partial } => {
                    self.position += (partial.len() - Marker::RIFF.len()) as u64;
                    info!("Source ended before a data chunk at position {}", offset);
                    report.unterminated_header = true;
                    break;
                }
            };
            self.position += header.consumed() as u64;

            let index = self.files_created;
            self.files_created += 1;
            let copy = extract_payload(&mut reader, &header, index, sink, self.buffer_size)?;
            self.position += copy.bytes_copied;

            report.extractions.push(Extraction {
                index,
                destination: copy.destination,
                offset,
                header_len: header.bytes.len(),
                declared_length: header.length,
                bytes_copied: copy.bytes_copied,
            });
        }

        report.bytes_scanned = self.position;
        Ok(report)
    }
}
