#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Code(String),
    Markdown(String),
}

impl Chunk {
    pub fn text(&self) -> &str {
        match self {
            Chunk::Code(text) | Chunk::Markdown(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Chunk::Code(_))
    }
}

/// Ordered chunks that become the notebook cells, one cell per chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub chunks: Vec<Chunk>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    pub fn code_cells(&self) -> usize {
        self.chunks.iter().filter(|chunk| chunk.is_code()).count()
    }

    pub fn markdown_cells(&self) -> usize {
        self.len() - self.code_cells()
    }
}

impl Extend<Chunk> for Document {
    fn extend<I: IntoIterator<Item = Chunk>>(&mut self, iter: I) {
        self.chunks.extend(iter);
    }
}
