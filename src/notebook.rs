use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::config::{NBFORMAT, NBFORMAT_MINOR};
use crate::models::{Chunk, Document};

/// A notebook in the v4 interchange format.
///
/// Fields are declared in key order so the serialized output matches what
/// the reference `nbformat` writer produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Code {
        execution_count: Option<u32>,
        id: String,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
    Markdown {
        id: String,
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
}

impl Cell {
    pub fn from_chunk(index: usize, chunk: &Chunk) -> Self {
        let id = format!("cell-{index}");
        let source = split_source(chunk.text());
        match chunk {
            Chunk::Code(_) => Cell::Code {
                execution_count: None,
                id,
                metadata: Map::new(),
                outputs: Vec::new(),
                source,
            },
            Chunk::Markdown(_) => Cell::Markdown {
                id,
                metadata: Map::new(),
                source,
            },
        }
    }

    /// Cell source joined back into a single string.
    pub fn source(&self) -> String {
        match self {
            Cell::Code { source, .. } | Cell::Markdown { source, .. } => source.concat(),
        }
    }
}

impl Notebook {
    pub fn from_document(document: &Document) -> Self {
        Self {
            cells: document
                .iter()
                .enumerate()
                .map(|(index, chunk)| Cell::from_chunk(index, chunk))
                .collect(),
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize notebook")?;
        buffer.push(b'\n');

        String::from_utf8(buffer).context("Serialized notebook is not valid UTF-8")
    }
}

pub fn write_notebook(path: &Path, notebook: &Notebook) -> Result<()> {
    let json = notebook.to_json()?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write notebook to {}", path.display()))
}

// Multiline strings are stored as a list of lines that keep their newline.
fn split_source(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
