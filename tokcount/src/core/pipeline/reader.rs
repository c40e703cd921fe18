// src/core/pipeline/reader.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{Result, TokcountError};

/// Streams a text source as blocks of `chunk_size` characters.
///
/// Every block holds exactly `chunk_size` characters except possibly the
/// last one. The first empty read ends the sequence, so no trailing empty
/// block is ever produced. Line endings are normalised the way a text-mode
/// read does it: `\r\n` and a lone `\r` both become `\n`.
///
/// The reader is tied to one stream's cursor and cannot be restarted.
#[derive(Debug)]
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    pending: Option<char>,
    finished: bool,
}

impl ChunkReader<BufReader<File>> {
    /// Opens `path` for chunked reading.
    ///
    /// # Errors
    ///
    /// Returns a filesystem error if the file cannot be opened.
    pub fn open(path: &Path, chunk_size: usize) -> Result<Self> {
        let file = File::open(path).map_err(|e| TokcountError::filesystem(path, e))?;
        Ok(Self::new(BufReader::new(file), chunk_size))
    }
}

impl<R: BufRead> ChunkReader<R> {
    #[must_use]
    pub const fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            pending: None,
            finished: false,
        }
    }

    fn read_chunk(&mut self) -> io::Result<String> {
        let mut chunk = String::with_capacity(self.chunk_size.min(1 << 16));
        for _ in 0..self.chunk_size {
            match self.next_char()? {
                Some(c) => chunk.push(c),
                None => break,
            }
        }
        Ok(chunk)
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        let c = match self.pending.take() {
            Some(c) => Some(c),
            None => self.decode_char()?,
        };

        if c == Some('\r') {
            match self.decode_char()? {
                Some('\n') | None => {}
                Some(other) => self.pending = Some(other),
            }
            return Ok(Some('\n'));
        }

        Ok(c)
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let mut buf = [0_u8; 4];
        loop {
            match self.reader.read(&mut buf[..1]) {
                Ok(0) => return Ok(None),
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        let width = match buf[0] {
            0x00..=0x7F => return Ok(Some(char::from(buf[0]))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            byte => return Err(invalid_utf8(format!("invalid leading byte 0x{byte:02x}"))),
        };

        self.reader.read_exact(&mut buf[1..width]).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                invalid_utf8(String::from("stream ended inside a character"))
            } else {
                e
            }
        })?;

        std::str::from_utf8(&buf[..width])
            .map(|s| s.chars().next())
            .map_err(|e| invalid_utf8(e.to_string()))
    }
}

impl<R: BufRead> Iterator for ChunkReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_chunk() {
            Ok(chunk) if chunk.is_empty() => {
                self.finished = true;
                None
            }
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn invalid_utf8(detail: String) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("stream is not valid UTF-8: {detail}"))
}
