//! Custom error types for the cedict-loader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only conditions that abort a load appear here. A line that fails to
/// decode or to match the record grammar is dropped inside the load loop
/// and is never surfaced as an error.
#[derive(Debug, Error)]
pub enum CedictError {
    /// The dictionary file could not be opened.
    #[error("Failed to open dictionary file: {0}")]
    FileOpen(#[source] std::io::Error),

    /// The file was opened but could not be mapped into memory
    /// (zero-length file, or a platform mapping failure).
    #[error("Failed to memory-map dictionary file: {0}")]
    Map(#[source] std::io::Error),

    /// A single string exceeded the pool's maximum allocation size.
    #[error("String allocation of {requested} bytes exceeds the pool maximum of {max} bytes")]
    Allocation { requested: usize, max: usize },
}

/// A convenience `Result` type alias using the crate's `CedictError` type.
pub type Result<T> = std::result::Result<T, CedictError>;
