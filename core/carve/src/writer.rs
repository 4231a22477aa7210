use crate::error::{CarveError, Result};
use crate::sink::OutputSink;
use crate::types::ChunkHeader;
use log::{debug, info};
use std::io::Read;
use utils::BinReadExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadCopy {
    pub destination: String,
    pub bytes_copied: u64,
}

/// Write `header` to a fresh destination for stream `index`, then copy up to
/// `header.length` payload bytes from `reader` in `buffer_size` pieces.
///
/// A source that ends early yields a shorter output; the caller sees it as
/// `bytes_copied < header.length`.
pub fn extract_payload<R, S>(
    reader: &mut R,
    header: &ChunkHeader,
    index: usize,
    sink: &mut S,
    buffer_size: usize,
) -> Result<PayloadCopy>
where
    R: Read + ?Sized,
    S: OutputSink + ?Sized,
{
    if buffer_size == 0 {
        return Err(CarveError::InvalidBufferSize);
    }
    info!("Reading wav data chunk of length {}", header.length);

    let destination = sink.begin(index)?;
    let written = sink.append(&header.bytes)?;
    debug!("Wrote {} header bytes to {}", written, destination);

    let mut buf = vec![0u8; buffer_size.min(header.length as usize)];
    let mut remaining = header.length as u64;
    let mut bytes_copied = 0u64;

    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let read = reader.read_up_to(&mut buf[..want])?;
        if read > 0 {
            let written = sink.append(&buf[..read])?;
            debug!("Wrote {} bytes to {}", written, destination);
        }

        bytes_copied += read as u64;
        remaining -= read as u64;
        if read < want {
            break;
        }
    }
    sink.finish()?;

    if remaining > 0 {
        info!(
            "Source ended early: {} of {} payload bytes written to {}",
            bytes_copied, header.length, destination
        );
    }

    Ok(PayloadCopy {
        destination,
        bytes_copied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::io::Cursor;

    fn header(length: u32) -> ChunkHeader {
        let mut bytes = b"RIFFdata".to_vec();
        bytes.extend_from_slice(&length.to_le_bytes());
        ChunkHeader { bytes, length }
    }

    #[test]
    fn test_copies_exact_length() {
        let mut cursor = Cursor::new(vec![0xAA, 0xBB, 0xCC, 0xDD]);
        let mut sink = MemorySink::new("output");
        let copy = extract_payload(&mut cursor, &header(2), 0, &mut sink, 4096).unwrap();

        assert_eq!(copy.destination, "output0.wav");
        assert_eq!(copy.bytes_copied, 2);
        assert_eq!(sink.get("output0.wav").unwrap(), b"RIFFdata\x02\x00\x00\x00\xAA\xBB");
        // Bytes past the payload stay in the stream.
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_copies_across_many_buffers() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut cursor = Cursor::new(data.clone());
        let mut sink = MemorySink::new("output");
        let copy = extract_payload(&mut cursor, &header(9_000), 3, &mut sink, 4096).unwrap();

        assert_eq!(copy.bytes_copied, 9_000);
        let out = sink.get("output3.wav").unwrap();
        assert_eq!(&out[12..], &data[..9_000]);
    }

    #[test]
    fn test_truncates_at_end_of_stream() {
        let mut cursor = Cursor::new(vec![1u8; 10]);
        let mut sink = MemorySink::new("output");
        let copy = extract_payload(&mut cursor, &header(100), 0, &mut sink, 4).unwrap();

        assert_eq!(copy.bytes_copied, 10);
        assert_eq!(sink.get("output0.wav").unwrap().len(), 12 + 10);
    }

    #[test]
    fn test_zero_length_writes_header_only() {
        let mut cursor = Cursor::new(vec![0xAA]);
        let mut sink = MemorySink::new("output");
        let copy = extract_payload(&mut cursor, &header(0), 0, &mut sink, 4096).unwrap();

        assert_eq!(copy.bytes_copied, 0);
        assert_eq!(sink.get("output0.wav").unwrap(), b"RIFFdata\x00\x00\x00\x00");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let mut cursor = Cursor::new(vec![0xAA]);
        let mut sink = MemorySink::new("output");
        assert!(matches!(
            extract_payload(&mut cursor, &header(1), 0, &mut sink, 0),
            Err(CarveError::InvalidBufferSize)
        ));
        assert!(sink.outputs.is_empty());
    }
}
