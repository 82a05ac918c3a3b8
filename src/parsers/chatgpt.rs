use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::models::{Message, Node, Role, Tree};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid export JSON: {0}")]
    InvalidJson(String),
    #[error("Export has no mapping object")]
    MissingMapping,
}

/// Reads a ChatGPT conversation export into a [`Tree`].
pub struct ChatGptParser {
    root_id: String,
}

impl ChatGptParser {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
        }
    }

    pub fn parse(&self, file_path: &Path) -> Result<Tree> {
        let raw = fs::read_to_string(file_path).context("Failed to read export file")?;
        self.parse_str(&raw)
    }

    pub fn parse_str(&self, raw: &str) -> Result<Tree> {
        let export: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Failed to parse export JSON: {}", err);
                return Err(ParseError::InvalidJson(err.to_string()).into());
            }
        };

        let mapping = export
            .get("mapping")
            .and_then(|v| v.as_object())
            .ok_or(ParseError::MissingMapping)?;

        let mut tree = Tree::new(self.root_id.clone());
        for (id, raw_node) in mapping {
            tree.insert(Self::parse_node(id, raw_node));
        }

        tracing::debug!("Loaded {} nodes from export", tree.len());
        Ok(tree)
    }

    fn parse_node(id: &str, raw_node: &Value) -> Node {
        let message = raw_node
            .get("message")
            .filter(|v| !v.is_null())
            .map(|raw_message| Self::parse_message(id, raw_message));

        let children = raw_node
            .get("children")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Node {
            id: id.to_string(),
            message,
            children,
        }
    }

    fn parse_message(id: &str, raw_message: &Value) -> Message {
        let role = raw_message
            .get("author")
            .and_then(|author| author.get("role"))
            .and_then(|v| v.as_str())
            .map(Role::from_export);

        let mut parts = Vec::new();
        if let Some(raw_parts) = raw_message
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|v| v.as_array())
        {
            for part in raw_parts {
                match part.as_str() {
                    Some(text) => parts.push(text.to_string()),
                    None => tracing::debug!("Skipping non-text part in node {}", id),
                }
            }
        }

        Message { role, parts }
    }
}

impl Default for ChatGptParser {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ROOT_ID)
    }
}
