//! Line-oriented console input.

use std::io::{BufRead, Read};

use crate::error::ConsoleResult;

/// Bytes kept from one line. The rest of an over-long line is skipped.
pub const MAX_LINE_BYTES: u64 = 4096;

/// Reads whole lines and hands them back without their terminator.
///
/// Every read consumes exactly one line, so a malformed answer never leaks
/// leftover bytes into the next prompt. Bytes that are not valid UTF-8 become
/// U+FFFD instead of failing the read.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line with `\n` / `\r\n` stripped, or `None` at end of input.
    pub fn read_line(&mut self) -> ConsoleResult<Option<String>> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() != Some(&b'\n') && read as u64 == MAX_LINE_BYTES {
            self.reader.skip_until(b'\n')?;
        }

        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
