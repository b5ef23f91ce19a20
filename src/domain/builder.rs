//! Tree builder: recursive Gini-driven partitioning of a training set.

use generational_arena::{Arena, Index};
use tracing::{debug, info, instrument, trace};

use crate::domain::arena::{DecisionTree, Node};
use crate::domain::image::Dataset;
use crate::domain::split::{find_best_separating_split, find_best_split, most_frequent};

/// Majority-label purity at or above which a node stops splitting.
pub const DEFAULT_TERMINATION_RATIO: f64 = 0.95;

/// Constructs decision trees from labeled datasets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeBuilder {
    termination_ratio: f64,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_termination_ratio(DEFAULT_TERMINATION_RATIO)
    }

    pub fn with_termination_ratio(termination_ratio: f64) -> Self {
        Self { termination_ratio }
    }

    pub fn termination_ratio(&self) -> f64 {
        self.termination_ratio
    }

    /// Build a tree over every example in `data`.
    ///
    /// Returns `None` for an empty dataset: there is nothing to classify with.
    #[instrument(level = "debug", skip_all, fields(n = data.len()))]
    pub fn build(&self, data: &Dataset) -> Option<DecisionTree> {
        if data.is_empty() {
            debug!("Empty training set, no tree built");
            return None;
        }

        let mut arena = Arena::new();
        let indices: Vec<usize> = (0..data.len()).collect();
        let root = self.grow(data, &mut arena, indices);
        let tree = DecisionTree::from_parts(arena, root);

        info!(
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            termination_ratio = self.termination_ratio(),
            "Decision tree built"
        );
        Some(tree)
    }

    /// Grow the subtree for a non-empty subset and return its root index.
    ///
    /// The subset is consumed: it is split into two freshly owned child
    /// subsets before recursing, so it is released before the children are
    /// built.
    fn grow(&self, data: &Dataset, arena: &mut Arena<Node>, indices: Vec<usize>) -> Index {
        let m = indices.len();
        let (label, freq) = most_frequent(data, &indices);
        if freq as f64 / m as f64 >= self.termination_ratio {
            trace!(m, label, freq, "Pure enough, leaf");
            return arena.insert(Node::Leaf { label });
        }

        let mut pixel = find_best_split(data, &indices);
        if !separates(data, &indices, pixel) {
            // The lowest-impurity pixel would leave one side empty and the
            // other equal to this subset; fall back to a pixel that divides it.
            match find_best_separating_split(data, &indices) {
                Some(separating) => {
                    debug!(m, pixel, separating, "Degenerate split, using separating pixel");
                    pixel = separating;
                }
                None => {
                    debug!(m, label, freq, "Unsplittable subset, majority leaf");
                    return arena.insert(Node::Leaf { label });
                }
            }
        }

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&idx| data.image(idx).pixels()[pixel] == 0);

        trace!(m, pixel, left = left.len(), right = right.len(), "Split");
        let left = self.grow(data, arena, left);
        let right = self.grow(data, arena, right);
        arena.insert(Node::Split { pixel, left, right })
    }
}

/// True when `pixel` sends at least one image of the subset to each side.
fn separates(data: &Dataset, indices: &[usize], pixel: usize) -> bool {
    let mut zero = false;
    let mut nonzero = false;
    for &idx in indices {
        if data.image(idx).pixels()[pixel] == 0 {
            zero = true;
        } else {
            nonzero = true;
        }
        if zero && nonzero {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::Image;

    fn dataset(examples: Vec<(Vec<u8>, u8)>) -> Dataset {
        let (images, labels): (Vec<_>, Vec<_>) = examples
            .into_iter()
            .map(|(px, l)| (Image::new(px.len(), 1, px).unwrap(), l))
            .unzip();
        Dataset::new(images, labels).unwrap()
    }

    #[test]
    fn given_empty_dataset_when_building_then_returns_none() {
        assert!(TreeBuilder::new().build(&Dataset::default()).is_none());
    }

    #[test]
    fn given_pure_dataset_when_building_then_single_leaf() {
        let data = dataset(vec![(vec![0, 255], 4), (vec![255, 0], 4)]);
        let tree = TreeBuilder::new().build(&data).unwrap();
        assert_eq!(tree.get_node(tree.root()), Some(&Node::Leaf { label: 4 }));
    }

    #[test]
    fn given_identical_images_with_different_labels_when_building_then_terminates_with_leaf() {
        let data = dataset(vec![(vec![0, 255], 1), (vec![0, 255], 2), (vec![0, 255], 2)]);
        let tree = TreeBuilder::new().build(&data).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.get_node(tree.root()), Some(&Node::Leaf { label: 2 }));
    }

    #[test]
    fn given_nonzero_below_threshold_when_partitioning_then_goes_right() {
        // Pixel 0 scores as "off" (< 128) for both, but partitions on 0 vs non-zero.
        let data = dataset(vec![(vec![0, 0], 3), (vec![5, 0], 8)]);
        let tree = TreeBuilder::new().build(&data).unwrap();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.classify(&Image::new(2, 1, vec![0, 0]).unwrap()).unwrap(), 3);
        assert_eq!(tree.classify(&Image::new(2, 1, vec![5, 0]).unwrap()).unwrap(), 8);
    }

    #[test]
    fn given_xor_pattern_behind_constant_pixel_when_building_then_separates_all() {
        let data = dataset(vec![
            (vec![0, 0, 0], 0),
            (vec![0, 255, 255], 0),
            (vec![0, 0, 255], 1),
            (vec![0, 255, 0], 1),
        ]);
        let tree = TreeBuilder::new().build(&data).unwrap();
        assert_eq!(tree.leaf_count(), 4);
        for (image, label) in data.iter() {
            assert_eq!(tree.classify(image).unwrap(), label);
        }
    }

    #[test]
    fn given_explicit_ratio_then_builder_reports_it() {
        assert_eq!(TreeBuilder::new().termination_ratio(), DEFAULT_TERMINATION_RATIO);
        assert_eq!(TreeBuilder::with_termination_ratio(0.6).termination_ratio(), 0.6);
    }

    #[test]
    fn given_lower_ratio_when_building_then_stops_earlier() {
        let data = dataset(vec![
            (vec![0], 1),
            (vec![0], 1),
            (vec![0], 1),
            (vec![255], 6),
        ]);
        let strict = TreeBuilder::new().build(&data).unwrap();
        let lax = TreeBuilder::with_termination_ratio(0.75).build(&data).unwrap();
        assert_eq!(strict.node_count(), 3);
        assert_eq!(lax.node_count(), 1);
    }
}
