//! # cedict-loader
//!
//! Loads a CEDICT-formatted Chinese-English dictionary text file into an
//! in-memory ordered collection of entries: one bulk load, then
//! read-only indexed access.
//!
//! The pipeline memory-maps the file, scans it into line spans without
//! copying, decodes each line as UTF-8, parses four fields by a fixed
//! grammar and copies the accepted fields into a bump-pointer string
//! pool that grows by coarse blocks instead of one heap allocation per
//! string.

pub mod cedict;

// Re-export the main types for convenience
pub use cedict::{
    models::{DictionaryEntry, EntryRef},
    pool::{PoolStr, StringPool},
    CedictError, Dictionary, Result,
};
