/// Root node id the ChatGPT exporter gives every conversation.
pub const DEFAULT_ROOT_ID: &str = "client-created-root";

/// Only fences opened with exactly this tag become code cells.
pub const CODE_FENCE_LANGUAGE: &str = "python";

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub root_id: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
        }
    }
}
