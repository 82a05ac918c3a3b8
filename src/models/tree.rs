use std::collections::HashMap;

use crate::models::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub message: Option<Message>,
    pub children: Vec<String>,
}

/// A conversation loaded from an export: every node keyed by id, plus the id
/// traversal starts from.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub root_id: String,
    pub nodes: HashMap<String, Node>,
}

impl Tree {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            nodes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
