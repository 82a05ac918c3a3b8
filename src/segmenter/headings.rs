use crate::text::{is_space, split_lines, trim, trim_start};

const MAX_HEADING_LEVEL: usize = 6;

/// Splits prose into markdown chunks that each start at an ATX heading.
///
/// Text before the first heading is a chunk of its own. Chunks are trimmed
/// and blank chunks are dropped.
pub fn split_by_heading(prose: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in split_lines(prose) {
        if is_heading(line) && !current.is_empty() {
            flush(&mut chunks, &current);
            current.clear();
        }
        current.push(line);
    }
    flush(&mut chunks, &current);

    chunks
}

/// `#` to `######` after optional indentation, followed by whitespace.
pub fn is_heading(line: &str) -> bool {
    let rest = trim_start(line);
    let level = rest.len() - rest.trim_start_matches('#').len();

    (1..=MAX_HEADING_LEVEL).contains(&level) && rest[level..].starts_with(is_space)
}

fn flush(chunks: &mut Vec<String>, lines: &[&str]) {
    let chunk = lines.join("\n");
    let trimmed = trim(&chunk);
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
