//! Data structures representing loaded dictionary records.

use super::pool::{PoolStr, StringPool};

/// One dictionary record as stored: pool handles, not text.
///
/// Created once during the load and never mutated; the text lives in
/// the owning [`Dictionary`](super::Dictionary)'s pool and is released
/// in bulk with it.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryEntry {
    pub traditional: PoolStr,
    pub pinyin: PoolStr,
    pub english: PoolStr,
    /// Present in the CEDICT schema but never produced by the line
    /// grammar, which skips the token between the headword and the
    /// pinyin bracket. Kept so the record shape matches the format;
    /// always `None`.
    pub simplified: Option<PoolStr>,
}

/// A record with its fields resolved against the owning pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef<'a> {
    pub traditional: &'a str,
    pub pinyin: &'a str,
    pub english: &'a str,
    pub simplified: Option<&'a str>,
}

impl DictionaryEntry {
    pub(crate) fn resolve<'a>(&self, pool: &'a StringPool) -> EntryRef<'a> {
        EntryRef {
            traditional: pool.get(self.traditional),
            pinyin: pool.get(self.pinyin),
            english: pool.get(self.english),
            simplified: self.simplified.map(|handle| pool.get(handle)),
        }
    }
}
