//! Infrastructure layer: dataset file I/O
//!
//! This layer turns bytes on disk into domain datasets.

pub mod error;
pub mod loader;

pub use error::{InfraError, InfraResult};
pub use loader::{load_dataset, read_dataset, IMAGE_HEIGHT, IMAGE_WIDTH, RECORD_LEN};
