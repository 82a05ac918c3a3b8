//! Line and whitespace rules shared by the walker and the segmenter.
//!
//! Chat exports are produced by Python tooling, so a "line" and a
//! "whitespace character" follow Python's `str.splitlines` and `str.isspace`
//! rather than `str::lines` and `char::is_whitespace`.

/// Whitespace as Python's `str.isspace` sees it: Unicode White_Space plus
/// the ASCII separators `\x1c`–`\x1f`.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

pub fn trim_start(text: &str) -> &str {
    text.trim_start_matches(is_space)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` into lines without their terminators. `\r\n` counts as one
/// break and a trailing break does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r'
            && let Some(&(next, '\n')) = chars.peek()
        {
            chars.next();
            start = next + 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
