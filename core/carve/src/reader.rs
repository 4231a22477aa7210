use crate::error::Result;
use crate::scanner::{Marker, SignatureScanner};
use crate::types::{ChunkHeader, HeaderScan};
use byteorder::{ByteOrder, LE};
use std::io::Read;
use utils::BinReadExt;

/// Assemble the header of a stream whose `RIFF` marker was just consumed.
///
/// Every byte up to and including the `data` tag is kept, sub-chunks in
/// between (`fmt `, `LIST`, ...) are carried over untouched. The header always
/// starts with a literal `RIFF`, whatever bytes the caller actually matched.
pub fn extract_header<R: Read + ?Sized>(reader: &mut R) -> Result<HeaderScan> {
    let mut header = Marker::RIFF.as_bytes().to_vec();
    let mut scanner = SignatureScanner::new(Marker::DATA);

    loop {
        let Some(byte) = reader.read_byte_opt()? else {
            return Ok(HeaderScan::EndOfStream { partial: header });
        };
        header.push(byte);

        if scanner.feed(byte) {
            break;
        }
    }

    let mut length_bytes = [0u8; 4];
    let read = reader.read_up_to(&mut length_bytes)?;
    header.extend_from_slice(&length_bytes[..read]);
    if read < length_bytes.len() {
        return Ok(HeaderScan::EndOfStream { partial: header });
    }

    Ok(HeaderScan::Complete(ChunkHeader {
        bytes: header,
        length: LE::read_u32(&length_bytes),
    }))
}
