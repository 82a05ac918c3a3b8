pub mod chatgpt;

pub use chatgpt::{ChatGptParser, ParseError};
