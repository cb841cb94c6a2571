//! The CEDICT record-line grammar.

/// Field slices extracted from one decoded line.
///
/// All fields borrow from the input; the caller copies the ones it keeps
/// into the string pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub traditional: &'a str,
    pub pinyin: &'a str,
    pub english: &'a str,
}

/// Parse one line of the form
/// `<traditional> <token>* [<pinyin>] /<english>/`.
///
/// The english field runs from the first `/` after the closing bracket
/// to the *last* `/` in the line, so slashes inside a gloss survive
/// intact: `/hello/hi/` parses as `hello/hi`. The token between the
/// headword and the bracket (the simplified form in real CEDICT data)
/// is skipped, and anything after the final slash is ignored. Any
/// grammar mismatch yields `None`.
pub fn parse_line(line: &str) -> Option<RawEntry<'_>> {
    let space = line.find(' ')?;
    let traditional = &line[..space];

    let open = space + line[space..].find('[')? + 1;
    let close = open + line[open..].find(']')?;
    let pinyin = &line[open..close];

    let slash = close + line[close..].find('/')? + 1;
    let last = line.rfind('/')?;
    if slash >= last {
        return None;
    }
    let english = &line[slash..last];

    Some(RawEntry {
        traditional,
        pinyin,
        english,
    })
}
