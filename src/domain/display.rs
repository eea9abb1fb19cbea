//! Terminal tree rendering of a [`WordTree`].
//!
//! Each node is labelled `word (freq) h=N`; a missing child beside a present
//! one is drawn as `·` so left and right stay distinguishable.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::tree::WordTree;

const EMPTY_SLOT: &str = "·";

pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for WordTree {
    fn to_term_tree(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_tree(self, root),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn build_tree(tree: &WordTree, idx: Index) -> Tree<String> {
    let Some(node) = tree.get_node(idx) else {
        return Tree::new(EMPTY_SLOT.to_string());
    };
    let label = format!("{} h={}", node.entry, node.height);

    // a lone child still needs its side visible, so the missing sibling gets a placeholder
    let leaves: Vec<Tree<String>> = match (node.left, node.right) {
        (None, None) => Vec::new(),
        (left, right) => [left, right]
            .into_iter()
            .map(|slot| match slot {
                Some(child) => build_tree(tree, child),
                None => Tree::new(EMPTY_SLOT.to_string()),
            })
            .collect(),
    };

    Tree::new(label).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_rendered_then_shows_placeholder() {
        let rendered = WordTree::new().to_term_tree().to_string();
        assert_eq!(rendered.trim_end(), "Empty tree");
    }

    #[test]
    fn given_balanced_tree_when_rendered_then_root_first_then_children() {
        let mut tree = WordTree::new();
        tree.insert("aaa", 1);
        tree.insert("bbb", 2);
        tree.insert("ccc", 3);

        let rendered = tree.to_term_tree().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "bbb (2) h=2");
        assert!(lines[1].ends_with("aaa (1) h=1"));
        assert!(lines[2].ends_with("ccc (3) h=1"));
    }

    #[test]
    fn given_lone_right_child_when_rendered_then_left_slot_is_placeholder() {
        let mut tree = WordTree::new();
        tree.insert("aaa", 1);
        tree.insert("bbb", 1);

        let rendered = tree.to_term_tree().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(EMPTY_SLOT));
        assert!(lines[2].ends_with("bbb (1) h=1"));
    }
}
