//! Raw input tracking
//!
//! [`TrackedInput`] sits between the caller's reader and the csv reader. It
//! keeps every byte handed out until the record containing it has been
//! quote-checked, and rewrites a multi-byte delimiter to [`DELIMITER_BYTE`]
//! so the csv reader can split on a single byte.

use std::io::{self, BufRead, BufReader, Read};

/// Stand-in byte for a multi-byte delimiter (never part of valid UTF-8)
pub(crate) const DELIMITER_BYTE: u8 = 0xFF;

/// Byte the csv reader splits on for `delimiter`
pub(crate) fn split_byte(delimiter: char) -> u8 {
    if delimiter.is_ascii() {
        delimiter as u8
    } else {
        DELIMITER_BYTE
    }
}

pub(crate) struct TrackedInput<R> {
    inner: BufReader<R>,
    /// UTF-8 encoding of a non-ASCII delimiter
    pattern: Option<Vec<u8>>,
    /// Bytes from `base` onwards, handed out up to `cursor`
    pending: Vec<u8>,
    base: u64,
    cursor: usize,
    line: Vec<u8>,
}

impl<R: Read> TrackedInput<R> {
    pub(crate) fn new(reader: R, delimiter: char) -> Self {
        let pattern = (!delimiter.is_ascii()).then(|| delimiter.to_string().into_bytes());

        Self {
            inner: BufReader::new(reader),
            pattern,
            pending: Vec::new(),
            base: 0,
            cursor: 0,
            line: Vec::new(),
        }
    }

    /// Remove and return everything handed out before absolute offset `end`
    pub(crate) fn take_until(&mut self, end: u64) -> Vec<u8> {
        let len = usize::try_from(end.saturating_sub(self.base))
            .unwrap_or(usize::MAX)
            .min(self.cursor);

        self.base += len as u64;
        self.cursor -= len;
        self.pending.drain(..len).collect()
    }

    /// Append the next line of input, `false` at end of input
    fn fill(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }

        let Some(pattern) = &self.pattern else {
            self.pending.extend_from_slice(&self.line);
            return Ok(true);
        };

        if self.line.contains(&DELIMITER_BYTE) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ));
        }

        let mut rest = self.line.as_slice();
        while let Some(at) = rest.windows(pattern.len()).position(|w| w == pattern.as_slice()) {
            self.pending.extend_from_slice(&rest[..at]);
            self.pending.push(DELIMITER_BYTE);
            rest = &rest[at + pattern.len()..];
        }
        self.pending.extend_from_slice(rest);

        Ok(true)
    }
}

impl<R: Read> Read for TrackedInput<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if self.cursor == self.pending.len() && !self.fill()? {
            return Ok(0);
        }

        let available = &self.pending[self.cursor..];
        let len = available.len().min(out.len());
        out[..len].copy_from_slice(&available[..len]);
        self.cursor += len;

        Ok(len)
    }
}
