//! Dataset loader for the binary image/label format.
//!
//! Layout:
//! - 4 bytes: example count `N`, signed 32-bit, native byte order
//! - `N` records of 1 label byte followed by 28x28 row-major pixel bytes
//!
//! Bytes after the last record are ignored.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::{Dataset, Image};
use crate::infrastructure::error::{InfraError, InfraResult};

pub const IMAGE_WIDTH: usize = 28;
pub const IMAGE_HEIGHT: usize = 28;

/// Bytes per example: label plus pixels.
pub const RECORD_LEN: usize = 1 + IMAGE_WIDTH * IMAGE_HEIGHT;

// Cap on up-front allocation so a corrupt header cannot reserve gigabytes.
const MAX_PREALLOC: usize = 1 << 16;

/// Load a dataset file from disk.
#[instrument(level = "debug")]
pub fn load_dataset(path: &Path) -> InfraResult<Dataset> {
    let file =
        File::open(path).map_err(|e| InfraError::io(format!("open {}", path.display()), e))?;
    let dataset = read_dataset(BufReader::new(file), path)?;
    debug!(examples = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

/// Decode a dataset from `reader`; `path` only names the source in errors.
pub fn read_dataset<R: Read>(mut reader: R, path: &Path) -> InfraResult<Dataset> {
    let mut header = [0u8; 4];
    read_record(&mut reader, &mut header, path).map_err(|e| match e {
        ReadFailure::Eof => InfraError::format(path, "missing example count"),
        ReadFailure::Io(e) => e,
    })?;

    let count = i32::from_ne_bytes(header);
    let count = usize::try_from(count)
        .map_err(|_| InfraError::format(path, format!("negative example count {}", count)))?;

    let mut images = Vec::with_capacity(count.min(MAX_PREALLOC));
    let mut labels = Vec::with_capacity(count.min(MAX_PREALLOC));
    let mut record = [0u8; RECORD_LEN];
    for index in 0..count {
        read_record(&mut reader, &mut record, path).map_err(|e| match e {
            ReadFailure::Eof => InfraError::format(
                path,
                format!("truncated at example {} of {}", index, count),
            ),
            ReadFailure::Io(e) => e,
        })?;
        labels.push(record[0]);
        images.push(Image::new(IMAGE_WIDTH, IMAGE_HEIGHT, record[1..].to_vec())?);
    }

    Ok(Dataset::new(images, labels)?)
}

enum ReadFailure {
    Eof,
    Io(InfraError),
}

fn read_record<R: Read>(reader: &mut R, buf: &mut [u8], path: &Path) -> Result<(), ReadFailure> {
    reader.read_exact(buf).map_err(|e: io::Error| match e.kind() {
        ErrorKind::UnexpectedEof => ReadFailure::Eof,
        _ => ReadFailure::Io(InfraError::io(format!("read {}", path.display()), e)),
    })
}
