use std::collections::HashSet;

use crate::models::Tree;
use crate::text::is_blank;

/// Collects the text parts of every assistant message reachable from
/// `root_id`, in depth-first pre-order with children in listed order.
///
/// Whitespace-only parts are dropped. A child id missing from the tree is an
/// empty subtree, and a node reachable through several parents is only
/// visited the first time.
pub fn walk(tree: &Tree, root_id: &str) -> Vec<String> {
    let mut parts = Vec::new();

    if tree.get(root_id).is_none() {
        tracing::warn!("Root node {} not found in export", root_id);
        return parts;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![root_id];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let node = match tree.get(id) {
            Some(node) => node,
            None => {
                tracing::debug!("Skipping missing node {}", id);
                continue;
            }
        };

        if let Some(message) = node.message.as_ref().filter(|m| m.is_assistant()) {
            parts.extend(
                message
                    .parts
                    .iter()
                    .filter(|part| !is_blank(part))
                    .cloned(),
            );
        }

        stack.extend(node.children.iter().rev().map(String::as_str));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Message, Node, Role};
    use crate::test_support::capture_logs;
    use tracing::Level;

    fn node(id: &str, role: Option<Role>, parts: &[&str], children: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            message: role.map(|role| Message {
                role: Some(role),
                parts: parts.iter().map(|p| p.to_string()).collect(),
            }),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn tree(nodes: Vec<Node>) -> Tree {
        let mut tree = Tree::new("root");
        for node in nodes {
            tree.insert(node);
        }
        tree
    }

    #[test]
    fn walk_emits_assistant_parts_in_pre_order() {
        let tree = tree(vec![
            node("root", None, &[], &["a", "d"]),
            node("a", Some(Role::Assistant), &["a1", "a2"], &["b", "c"]),
            node("b", Some(Role::Assistant), &["b1"], &[]),
            node("c", Some(Role::Assistant), &["c1"], &[]),
            node("d", Some(Role::Assistant), &["d1"], &[]),
        ]);

        assert_eq!(walk(&tree, "root"), vec!["a1", "a2", "b1", "c1", "d1"]);
    }

    #[test]
    fn walk_skips_other_roles_but_visits_their_children() {
        let tree = tree(vec![
            node("root", Some(Role::System), &["system prompt"], &["user"]),
            node("user", Some(Role::User), &["question"], &["tool"]),
            node("tool", Some(Role::Tool), &["tool output"], &["answer"]),
            node("answer", Some(Role::Assistant), &["answer text"], &[]),
        ]);

        assert_eq!(walk(&tree, "root"), vec!["answer text"]);
    }

    #[test]
    fn walk_drops_whitespace_only_parts_without_trimming_others() {
        let tree = tree(vec![node(
            "root",
            Some(Role::Assistant),
            &["   \n\t", "  keep me  ", "", "\u{1f}\u{1c}"],
            &[],
        )]);

        assert_eq!(walk(&tree, "root"), vec!["  keep me  "]);
    }

    #[test]
    fn walk_missing_root_yields_nothing() {
        let tree = tree(vec![node("other", Some(Role::Assistant), &["text"], &[])]);

        assert!(walk(&tree, "root").is_empty());
    }

    #[test]
    fn walk_treats_missing_child_as_empty_subtree() {
        let tree = tree(vec![
            node("root", None, &[], &["ghost", "real"]),
            node("real", Some(Role::Assistant), &["real text"], &[]),
        ]);

        assert_eq!(walk(&tree, "root"), vec!["real text"]);
    }

    #[test]
    fn walk_visits_shared_child_once() {
        let tree = tree(vec![
            node("root", None, &[], &["a", "b"]),
            node("a", None, &[], &["shared"]),
            node("b", None, &[], &["shared"]),
            node("shared", Some(Role::Assistant), &["once"], &[]),
        ]);

        assert_eq!(walk(&tree, "root"), vec!["once"]);
    }

    #[test]
    fn walk_terminates_on_cycles() {
        let tree = tree(vec![
            node("root", Some(Role::Assistant), &["r"], &["a"]),
            node("a", Some(Role::Assistant), &["a"], &["root", "a"]),
        ]);

        assert_eq!(walk(&tree, "root"), vec!["r", "a"]);
    }

    #[test]
    fn walk_handles_deep_chains() {
        let depth = 100_000;
        let mut nodes = Vec::with_capacity(depth);
        for i in 0..depth {
            let id = if i == 0 { "root".to_string() } else { i.to_string() };
            let child = (i + 1).to_string();
            let children: Vec<&str> = if i + 1 < depth {
                vec![child.as_str()]
            } else {
                Vec::new()
            };
            nodes.push(node(&id, Some(Role::Assistant), &["x"], &children));
        }
        let tree = tree(nodes);

        assert_eq!(walk(&tree, "root").len(), depth);
    }

    #[test]
    fn walk_missing_root_logs_warning() {
        let tree = Tree::new("root");
        let logs = capture_logs(Level::WARN, || {
            assert!(walk(&tree, "client-created-root").is_empty());
        });

        assert!(logs.contains("Root node client-created-root not found in export"));
    }

    #[test]
    fn walk_missing_child_logs_at_debug() {
        let tree = tree(vec![node("root", None, &[], &["ghost"])]);
        let logs = capture_logs(Level::DEBUG, || {
            assert!(walk(&tree, "root").is_empty());
        });

        assert!(logs.contains("Skipping missing node ghost"));
    }
}
