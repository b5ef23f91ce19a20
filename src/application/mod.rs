//! Application layer: training and evaluation use cases
//!
//! This layer orchestrates domain logic over already loaded datasets.

pub mod evaluate;

pub use evaluate::{evaluate, train_and_evaluate, Evaluation};
