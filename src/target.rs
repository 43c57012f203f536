//! The file under exercise
//!
//! Wraps the single read/write handle the session owns for its whole
//! lifetime. Every operation works at the file's current cursor: reads and
//! writes advance it, seeks reposition it. The handle is closed exactly
//! once, when the session drops it on shutdown.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Reference point for a seek offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// From the start of the file
    Start,
    /// From the current cursor position
    Current,
    /// From the end of the file
    End,
}

impl Whence {
    /// Map a numeric whence code: 0 = start, 1 = current, 2 = end.
    /// Anything else has no defined meaning and maps to `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Start),
            1 => Some(Self::Current),
            2 => Some(Self::End),
            _ => None,
        }
    }
}

/// The open file being exercised
#[derive(Debug)]
pub struct TargetFile {
    file: std::fs::File,
    path: PathBuf,
}

impl TargetFile {
    /// Open an existing file for simultaneous reading and writing, cursor
    /// at the start. The file is never created or truncated here.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "opened target file");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Read up to `count` bytes from the current cursor position.
    ///
    /// The returned buffer holds exactly the bytes read; at end-of-file it
    /// is shorter than `count`, possibly empty. The buffer grows with the
    /// data, so a huge `count` against a small file stays cheap.
    pub fn read_at_cursor(&mut self, count: usize) -> io::Result<Vec<u8>> {
        let mut data = Vec::new();
        (&mut self.file).take(count as u64).read_to_end(&mut data)?;
        debug!(requested = count, got = data.len(), "read");
        Ok(data)
    }

    /// Write all of `data` at the current cursor position and flush.
    pub fn write_at_cursor(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.file.flush()?;
        debug!(bytes = data.len(), "wrote");
        Ok(())
    }

    /// Reposition the cursor to `offset` relative to `whence` and return
    /// the new position. A negative offset from the start cannot name a
    /// valid position and fails like any other out-of-range seek.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> io::Result<u64> {
        let pos = match whence {
            Whence::Start => {
                let offset = u64::try_from(offset).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "negative offset from start")
                })?;
                SeekFrom::Start(offset)
            }
            Whence::Current => SeekFrom::Current(offset),
            Whence::End => SeekFrom::End(offset),
        };

        let new_pos = self.file.seek(pos)?;
        debug!(offset, ?whence, new_pos, "seek");
        Ok(new_pos)
    }

    /// Path the file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}
