//! Core CEDICT loader module

pub mod error;
pub mod models;
pub mod pool;

mod decoder;
mod lines;
mod mapped;
mod parser;

use std::path::Path;

use log::{debug, info};

pub use error::{CedictError, Result};
use lines::Lines;
use mapped::MappedTextFile;
use models::{DictionaryEntry, EntryRef};
use pool::StringPool;

/// An in-memory CEDICT dictionary: one bulk load, then read-only access.
///
/// Owns a [`StringPool`] holding every field's text and an ordered list
/// of entries in file line order. Entries are only appended during
/// [`open`](Dictionary::open) and are destroyed together with the pool.
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    pool: StringPool,
    skipped: usize,
}

impl Dictionary {
    /// Load a CEDICT file from the given path.
    ///
    /// Maps the file, scans it line by line, decodes each line as UTF-8
    /// and parses it against the record grammar. Fields of accepted
    /// lines are copied into the string pool; lines that fail to decode
    /// or to parse are dropped and counted, never fatal. The mapping is
    /// released as soon as the scan finishes.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file cannot be memory-mapped (including zero-length files)
    /// - A field exceeds the pool's single-allocation ceiling
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading CEDICT file: {}", path.display());

        let mut pool = StringPool::new();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        {
            let mapped = MappedTextFile::open(path)?;
            debug!("Mapped {} bytes", mapped.len());
            for span in Lines::new(mapped.bytes()) {
                let Some(line) = decoder::decode_line(span) else {
                    debug!("Dropping line with invalid UTF-8 ({} bytes)", span.len());
                    skipped += 1;
                    continue;
                };
                let Some(raw) = parser::parse_line(&line) else {
                    debug!("Dropping malformed line: {:?}", line);
                    skipped += 1;
                    continue;
                };
                entries.push(DictionaryEntry {
                    traditional: pool.alloc(raw.traditional)?,
                    pinyin: pool.alloc(raw.pinyin)?,
                    english: pool.alloc(raw.english)?,
                    simplified: None,
                });
            }
            // Mapping dropped here; every surviving field has been
            // copied into the pool and no longer depends on the file.
        }

        info!(
            "Loaded {} entries ({} lines skipped, {} pool bytes)",
            entries.len(),
            skipped,
            pool.allocated_bytes()
        );

        Ok(Self {
            entries,
            pool,
            skipped,
        })
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bounds-checked indexed access, `None` past the end.
    pub fn entry(&self, index: usize) -> Option<EntryRef<'_>> {
        self.entries.get(index).map(|entry| entry.resolve(&self.pool))
    }

    /// Entries in file line order.
    pub fn iter(&self) -> impl Iterator<Item = EntryRef<'_>> {
        self.entries.iter().map(|entry| entry.resolve(&self.pool))
    }

    /// Lines dropped for invalid UTF-8 or a grammar mismatch.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Total bytes retained by the string pool.
    pub fn pool_bytes(&self) -> usize {
        self.pool.allocated_bytes()
    }
}
