pub mod config;
pub mod convert;
pub mod models;
pub mod notebook;
pub mod parsers;
pub mod segmenter;
pub mod text;
pub mod walker;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::ConvertOptions;
pub use convert::convert;
pub use models::{Chunk, Document, Role, Tree};
pub use notebook::Notebook;
