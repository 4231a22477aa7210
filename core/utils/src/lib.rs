use std::io::{self, ErrorKind, Read, Write};

/// Extension trait for forward-only byte stream reads
pub trait BinReadExt: Read {
    /// Read a single byte, returning `None` once the stream is exhausted
    fn read_byte_opt(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Fill `buf` as far as the stream allows.
    ///
    /// Unlike `read_exact`, hitting end of stream is not an error: the number of
    /// bytes actually placed in `buf` is returned and may be anything from 0 to
    /// `buf.len()`. Short reads are retried until the buffer is full or the
    /// underlying reader reports end of stream.
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

/// Extension trait for writing binary data
pub trait BinWriteExt: Write {
    /// Write the whole slice and return its length, for progress reporting
    fn write_counted(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.write_all(bytes)?;
        Ok(bytes.len())
    }
}

// Implement for all types that implement Read/Write
impl<R: Read + ?Sized> BinReadExt for R {}
impl<W: Write + ?Sized> BinWriteExt for W {}
