use serde::Serialize;

pub const DEFAULT_BUFFER_SIZE: usize = 4096;
pub const DEFAULT_PREFIX: &str = "output";

/// How a destination file is held while its payload is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// One handle, opened when the stream is detected and closed once its
    /// payload copy ends.
    #[default]
    Scoped,
    /// Open, append, close for every buffer written.
    PerWrite,
}

#[derive(Debug, Clone)]
pub struct CarveOptions {
    pub buffer_size: usize,
    pub write_mode: WriteMode,
    pub prefix: String,
}

impl Default for CarveOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            write_mode: WriteMode::default(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Reconstructed header of one embedded stream: `RIFF`, every byte read while
/// looking for the `data` tag (the tag included), then the 4 length bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkHeader {
    pub bytes: Vec<u8>,
    pub length: u32,
}

impl ChunkHeader {
    /// Bytes taken from the source after the `RIFF` marker.
    pub fn consumed(&self) -> usize {
        self.bytes.len() - crate::Marker::RIFF.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderScan {
    Complete(ChunkHeader),
    /// Source ended before the `data` tag and its length were read.
    EndOfStream { partial: Vec<u8> },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub index: usize,
    pub destination: String,
    /// Source offset of the `R` in `RIFF`
    pub offset: u64,
    pub header_len: usize,
    pub declared_length: u32,
    pub bytes_copied: u64,
}

impl Extraction {
    pub fn is_truncated(&self) -> bool {
        self.bytes_copied < self.declared_length as u64
    }

    pub fn file_len(&self) -> u64 {
        self.header_len as u64 + self.bytes_copied
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CarveReport {
    pub extractions: Vec<Extraction>,
    pub bytes_scanned: u64,
    /// A `RIFF` marker was found but the source ended before its `data` tag.
    pub unterminated_header: bool,
}

impl CarveReport {
    pub fn truncated(&self) -> impl Iterator<Item = &Extraction> {
        self.extractions.iter().filter(|e| e.is_truncated())
    }

    pub fn payload_bytes(&self) -> u64 {
        self.extractions.iter().map(|e| e.bytes_copied).sum()
    }
}
