/// A fixed byte sequence to look for in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(&'static [u8]);

impl Marker {
    /// Opening tag of a RIFF container
    pub const RIFF: Marker = Marker(b"RIFF");
    /// Tag of the WAVE sample data sub-chunk
    pub const DATA: Marker = Marker(b"data");

    /// # Panics
    ///
    /// Panics if `bytes` is empty.
    pub const fn new(bytes: &'static [u8]) -> Self {
        assert!(!bytes.is_empty(), "marker must not be empty");
        Marker(bytes)
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Incremental, non-overlapping marker matcher.
///
/// Each fed byte is compared only against the next expected marker byte. A
/// mismatch drops all progress, including when the offending byte would
/// itself begin a new partial match, so a marker with a self-overlapping
/// prefix (e.g. `aab` in `aaab`) can be missed. Neither `RIFF` nor `data`
/// overlaps itself.
#[derive(Debug, Clone)]
pub struct SignatureScanner {
    marker: Marker,
    matched: usize,
}

impl SignatureScanner {
    pub fn new(marker: Marker) -> Self {
        Self { marker, matched: 0 }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Number of marker bytes matched so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Feed the next stream byte. Returns `true` when this byte completes the
    /// marker, in which case progress is reset for the next occurrence.
    pub fn feed(&mut self, byte: u8) -> bool {
        if self.marker.0[self.matched] == byte {
            self.matched += 1;
        } else {
            self.matched = 0;
        }

        if self.matched == self.marker.len() {
            self.matched = 0;
            return true;
        }
        false
    }
}
