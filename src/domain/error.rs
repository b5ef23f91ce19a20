//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the dataset and tree invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("image has {actual} pixels, expected {width}x{height}")]
    PixelCount {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("dataset has {images} images but {labels} labels")]
    Misaligned { images: usize, labels: usize },

    #[error("label {label} of example {index} is outside 0..={max}")]
    InvalidLabel { index: usize, label: u8, max: u8 },

    #[error("image {index} is {actual_width}x{actual_height}, expected {width}x{height}")]
    DimensionMismatch {
        index: usize,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("split pixel {pixel} is outside an image of {pixel_count} pixels")]
    PixelOutOfRange { pixel: usize, pixel_count: usize },

    #[error("cannot classify {0} test examples: the training set is empty")]
    EmptyTrainingSet(usize),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
