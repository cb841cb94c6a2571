//! Read-only memory mapping of the dictionary file.

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

use super::error::{CedictError, Result};

/// A dictionary file mapped read-only into memory.
///
/// Owns the mapping for its whole lifetime and releases it when the
/// value is dropped, on every path. The file handle is only needed to
/// create the map and closes when [`open`](MappedTextFile::open)
/// returns.
#[derive(Debug)]
pub struct MappedTextFile {
    map: Mmap,
}

impl MappedTextFile {
    /// Map the file at `path` read-only.
    ///
    /// # Errors
    /// - [`CedictError::FileOpen`] if the file cannot be opened
    /// - [`CedictError::Map`] if it opens but cannot be mapped;
    ///   zero-length files are rejected here rather than mapped empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(CedictError::FileOpen)?;
        let len = file.metadata().map_err(CedictError::Map)?.len();
        // memmap2 maps a zero-length file as an empty view instead of
        // failing the way the platform mapping call would.
        if len == 0 {
            return Err(CedictError::Map(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot map a zero-length file",
            )));
        }
        // Safety: the map is read-only and private to this process; we
        // assume the file is not truncated underneath us while loaded.
        let map = unsafe { Mmap::map(&file) }.map_err(CedictError::Map)?;
        Ok(Self { map })
    }

    /// The whole file contents as a byte slice.
    pub fn bytes(&self) -> &[u8] {
        &self.map
    }

    /// File length in bytes.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}
