//! Per-line UTF-8 decoding.

use std::borrow::Cow;

use encoding_rs::UTF_8;

/// Decode one line's bytes as UTF-8.
///
/// Returns `None` for invalid byte sequences; the caller drops the line
/// and continues with the next one. Valid input borrows the original
/// bytes, so the common case allocates nothing. No state is carried
/// between lines.
pub fn decode_line(bytes: &[u8]) -> Option<Cow<'_, str>> {
    UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
}
