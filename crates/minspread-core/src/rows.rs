//! Row extraction: header skip, whitespace tokenization, predicate filter.

/// Lazily yields the tokenized rows of `text` accepted by `accept`.
///
/// The first line is always treated as a header and dropped, even when the
/// source has none. Blank lines reach `accept` as an empty slice.
pub fn valid_rows<'a, P>(text: &'a str, accept: P) -> impl Iterator<Item = Vec<&'a str>> + 'a
where
    P: Fn(&[&str]) -> bool + 'a,
{
    split_lines(text)
        .skip(1)
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(move |tokens| accept(tokens.as_slice()))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line boundary, counting `\r\n` as one break. A trailing
/// break does not produce an empty last line.
fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(at) = rest.find(is_line_break) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..at];
        let tail = &rest[at..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
        Some(line)
    })
}
