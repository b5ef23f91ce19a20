//! Domain layer: images, impurity scoring and the decision tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod image;
pub mod impurity;
pub mod split;

pub use arena::{DecisionTree, Node, TreeIterator};
pub use builder::{TreeBuilder, DEFAULT_TERMINATION_RATIO};
pub use error::{DomainError, DomainResult};
pub use image::{Dataset, Image, MAX_LABEL, NUM_LABELS};
pub use impurity::{split_gini_impurity, SCORE_THRESHOLD};
pub use split::{find_best_separating_split, find_best_split, most_frequent};
