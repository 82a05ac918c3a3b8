use anyhow::Result;
use std::path::Path;

use crate::config::ConvertOptions;
use crate::models::Document;
use crate::notebook::{Notebook, write_notebook};
use crate::parsers::ChatGptParser;
use crate::segmenter::assemble;
use crate::walker::walk;

/// Converts the export at `input` into a notebook written to `output`.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<Document> {
    let parser = ChatGptParser::new(options.root_id.clone());
    let tree = parser.parse(input)?;

    let parts = walk(&tree, &tree.root_id);
    let document = assemble(&parts);

    write_notebook(output, &Notebook::from_document(&document))?;

    tracing::info!(
        "Converted {} assistant parts into {} cells ({} code, {} markdown)",
        parts.len(),
        document.len(),
        document.code_cells(),
        document.markdown_cells()
    );

    Ok(document)
}
