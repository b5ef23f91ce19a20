//! Arena-backed decision tree: node storage, classification and rendering.

use generational_arena::{Arena, Index};
use std::fmt;
use termtree::Tree;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::image::Image;

/// Node of a decision tree: exactly one of a classification or a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying the predicted label.
    Leaf { label: u8 },
    /// Internal node: images with value 0 at `pixel` go `left`, all others `right`.
    Split {
        pixel: usize,
        left: Index,
        right: Index,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { label } => write!(f, "label {}", label),
            Node::Split { pixel, .. } => write!(f, "pixel {}", pixel),
        }
    }
}

/// Arena-backed binary decision tree.
///
/// Nodes live in a generational arena and refer to their children by index.
/// Every `Split` owns two children that exist in the same arena, so a
/// traversal from the root always ends at a `Leaf`. The tree is immutable once
/// built; dropping it releases every node at once.
#[derive(Debug)]
pub struct DecisionTree {
    /// Arena storage for all tree nodes
    arena: Arena<Node>,
    /// Index of the root node
    root: Index,
}

impl DecisionTree {
    /// Assemble a tree from nodes inserted bottom-up; `root` must be in `arena`.
    pub(crate) fn from_parts(arena: Arena<Node>, root: Index) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|(_, node)| node.is_leaf()).count()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of nodes on the longest root-to-leaf path; a lone leaf has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        match self.get_node(node_idx) {
            Some(Node::Split { left, right, .. }) => {
                1 + self.calculate_depth(*left).max(self.calculate_depth(*right))
            }
            Some(Node::Leaf { .. }) => 1,
            None => 0,
        }
    }

    /// Predicted label for `image`.
    pub fn classify(&self, image: &Image) -> DomainResult<u8> {
        self.route(image).map(|(label, _)| label)
    }

    /// Walk from the root to a leaf; returns the leaf's label and the number
    /// of nodes visited, which never exceeds [`depth`](Self::depth).
    pub fn route(&self, image: &Image) -> DomainResult<(u8, usize)> {
        self.descend(image).map(|(_, label, visited)| (label, visited))
    }

    /// Arena index of the leaf `image` ends up in.
    pub fn leaf_index(&self, image: &Image) -> DomainResult<Index> {
        self.descend(image).map(|(leaf, _, _)| leaf)
    }

    /// A zero pixel at a split routes left, any other value routes right.
    #[instrument(level = "trace", skip_all)]
    fn descend(&self, image: &Image) -> DomainResult<(Index, u8, usize)> {
        let mut current = self.root;
        let mut visited = 1;
        loop {
            match self.arena[current] {
                Node::Leaf { label } => return Ok((current, label, visited)),
                Node::Split { pixel, left, right } => {
                    let value = image.pixel(pixel).ok_or(DomainError::PixelOutOfRange {
                        pixel,
                        pixel_count: image.pixel_count(),
                    })?;
                    current = if value == 0 { left } else { right };
                    visited += 1;
                }
            }
        }
    }

    /// Render the tree for display, left child first.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &DecisionTree, node_idx: Index) -> Tree<String> {
            match tree.arena[node_idx] {
                Node::Leaf { label } => Tree::new(format!("label {}", label)),
                Node::Split { pixel, left, right } => {
                    Tree::new(format!("pixel {}", pixel))
                        .with_leaves([build(tree, left), build(tree, right)])
                }
            }
        }
        build(self, self.root)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

/// Pre-order traversal, left subtree before right.
pub struct TreeIterator<'a> {
    tree: &'a DecisionTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a DecisionTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        if let Node::Split { left, right, .. } = node {
            // Push right first so left is visited first
            self.stack.push(*right);
            self.stack.push(*left);
        }
        Some((current_idx, node))
    }
}
