pub mod chunk;
pub mod message;
pub mod tree;

pub use chunk::{Chunk, Document};
pub use message::{Message, Role};
pub use tree::{Node, Tree};
