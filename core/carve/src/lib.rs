//! Carve RIFF/WAVE streams out of arbitrary binary containers.
//!
//! The source is read once, front to back. A [`SignatureScanner`] looks for
//! `RIFF`; on a hit the header is rebuilt up to the `data` tag and its
//! little-endian length, and that many payload bytes are copied to a fresh
//! destination provided by an [`OutputSink`].

pub mod carver;
pub mod error;
pub mod process;
pub mod reader;
pub mod scanner;
pub mod sink;
pub mod types;
pub mod writer;

pub use carver::WavCarver;
pub use error::{CarveError, Result};
pub use reader::extract_header;
pub use scanner::{Marker, SignatureScanner};
pub use sink::{DirectorySink, DiscardSink, MemorySink, OutputSink};
pub use types::*;
pub use writer::{PayloadCopy, extract_payload};
