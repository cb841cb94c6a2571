//! Zero-copy line scanning over a mapped byte buffer.

use memchr::memchr;

/// Forward-only iterator over the record lines of a byte buffer.
///
/// Splits on `\n`; the final line need not be newline-terminated.
/// Comment lines (first byte `#`) and empty lines are skipped. A
/// trailing `\r` is trimmed so CRLF files scan the same as LF files.
/// Yielded spans borrow the buffer; nothing is copied.
pub struct Lines<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.buf.len() {
            let rest = &self.buf[self.pos..];
            let (mut line, advance) = match memchr(b'\n', rest) {
                Some(nl) => (&rest[..nl], nl + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;
            if let [head @ .., b'\r'] = line {
                line = head;
            }
            if line.is_empty() || line[0] == b'#' {
                continue;
            }
            return Some(line);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(buf: &[u8]) -> Vec<&[u8]> {
        Lines::new(buf).collect()
    }

    #[test]
    fn splits_on_newline_and_skips_comments_and_blanks() {
        let buf = b"# header\nalpha\n\nbeta\n# trailing comment\n";
        assert_eq!(scan(buf), vec![b"alpha".as_slice(), b"beta".as_slice()]);
    }

    #[test]
    fn final_line_without_newline_is_yielded() {
        assert_eq!(scan(b"alpha\nbeta"), vec![b"alpha".as_slice(), b"beta".as_slice()]);
    }

    #[test]
    fn crlf_lines_lose_the_carriage_return() {
        assert_eq!(scan(b"alpha\r\nbeta\r\n"), vec![b"alpha".as_slice(), b"beta".as_slice()]);
    }

    #[test]
    fn lone_carriage_return_line_counts_as_empty() {
        assert_eq!(scan(b"\r\nalpha\n"), vec![b"alpha".as_slice()]);
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        assert!(scan(b"").is_empty());
    }

    #[test]
    fn hash_must_be_first_byte_to_comment() {
        assert_eq!(scan(b" # not a comment\n"), vec![b" # not a comment".as_slice()]);
    }
}
