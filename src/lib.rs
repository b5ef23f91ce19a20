//! Gini-impurity decision tree classifier for fixed-size grayscale images.
//!
//! Layers, innermost first:
//! - [`domain`]: images, impurity scoring, split selection, tree building and classification
//! - [`infrastructure`]: the binary dataset loader
//! - [`application`]: train-then-evaluate use case
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing and command execution

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{Dataset, DecisionTree, Image, Node, TreeBuilder};
