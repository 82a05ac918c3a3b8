use crate::config::CODE_FENCE_LANGUAGE;
use crate::text::trim;

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Code(String),
    Prose(String),
}

/// Splits `text` into prose and fenced python code, in source order.
///
/// A code span opens with the fence tag followed by a newline and closes at
/// the next bare fence. Matching is leftmost-first and non-overlapping. Other
/// fenced blocks stay inside the surrounding prose. Spans are trimmed and
/// blank spans are dropped.
pub fn split_code_blocks(text: &str) -> Vec<Span> {
    let opening = format!("{FENCE}{CODE_FENCE_LANGUAGE}\n");
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(block) = find_code_block(text, cursor, &opening) {
        push_trimmed(&mut spans, Span::Prose, &text[cursor..block.start]);
        push_trimmed(&mut spans, Span::Code, &text[block.code_start..block.code_end]);
        cursor = block.end;
    }

    push_trimmed(&mut spans, Span::Prose, &text[cursor..]);
    spans
}

struct CodeBlock {
    start: usize,
    code_start: usize,
    code_end: usize,
    end: usize,
}

// An opening fence without a closing fence ends the scan.
fn find_code_block(text: &str, from: usize, opening: &str) -> Option<CodeBlock> {
    let start = from + text[from..].find(opening)?;
    let code_start = start + opening.len();
    let code_end = code_start + text[code_start..].find(FENCE)?;

    Some(CodeBlock {
        start,
        code_start,
        code_end,
        end: code_end + FENCE.len(),
    })
}

fn push_trimmed(spans: &mut Vec<Span>, make: fn(String) -> Span, raw: &str) {
    let trimmed = trim(raw);
    if !trimmed.is_empty() {
        spans.push(make(trimmed.to_string()));
    }
}
