//! Accuracy of a decision tree on a held-out dataset.

use tracing::{info, instrument};

use crate::domain::{Dataset, DecisionTree, DomainError, DomainResult, TreeBuilder};

/// Outcome of classifying every example of a test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Examples whose predicted label equals the true label
    pub correct: usize,
    /// Examples classified
    pub total: usize,
}

impl Evaluation {
    /// Fraction of correct predictions, 0.0 for an empty test set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Classify every example of `test` with `tree` and count the matches.
#[instrument(level = "debug", skip_all, fields(n = test.len()))]
pub fn evaluate(tree: &DecisionTree, test: &Dataset) -> DomainResult<Evaluation> {
    let mut correct = 0;
    for (image, label) in test.iter() {
        if tree.classify(image)? == label {
            correct += 1;
        }
    }
    Ok(Evaluation {
        correct,
        total: test.len(),
    })
}

/// Build a tree from `training` and evaluate it on `testing`.
///
/// Both datasets must share image dimensions. An empty training set yields
/// no tree, which is only acceptable when there is nothing to classify.
pub fn train_and_evaluate(
    builder: &TreeBuilder,
    training: &Dataset,
    testing: &Dataset,
) -> DomainResult<(Option<DecisionTree>, Evaluation)> {
    if let (Some((width, height)), Some((actual_width, actual_height))) =
        (training.dimensions(), testing.dimensions())
    {
        if (width, height) != (actual_width, actual_height) {
            return Err(DomainError::DimensionMismatch {
                index: 0,
                width,
                height,
                actual_width,
                actual_height,
            });
        }
    }

    let tree = builder.build(training);
    let evaluation = match &tree {
        Some(tree) => evaluate(tree, testing)?,
        None if testing.is_empty() => Evaluation {
            correct: 0,
            total: 0,
        },
        None => return Err(DomainError::EmptyTrainingSet(testing.len())),
    };

    info!(
        correct = evaluation.correct,
        total = evaluation.total,
        accuracy = evaluation.accuracy(),
        "Evaluation complete"
    );
    Ok((tree, evaluation))
}
