pub mod fences;
pub mod headings;

use crate::models::{Chunk, Document};

pub use fences::{Span, split_code_blocks};
pub use headings::split_by_heading;

/// Segments one message part into code and markdown chunks, expanding each
/// prose span in place into its heading chunks.
pub fn segment(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for span in split_code_blocks(text) {
        match span {
            Span::Code(code) => chunks.push(Chunk::Code(code)),
            Span::Prose(prose) => {
                chunks.extend(split_by_heading(&prose).into_iter().map(Chunk::Markdown));
            }
        }
    }

    chunks
}

/// Builds the document from message parts in the order they were collected.
pub fn assemble<I, S>(parts: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::default();
    for part in parts {
        document.extend(segment(part.as_ref()));
    }
    document
}
