//! Labeled grayscale images and the datasets that own them.

use crate::domain::error::{DomainError, DomainResult};

/// Number of distinct classification labels (digits 0-9).
pub const NUM_LABELS: usize = 10;

/// Largest valid label value.
pub const MAX_LABEL: u8 = (NUM_LABELS - 1) as u8;

/// A single grayscale image, row-major, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap raw pixel bytes; their count must equal `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> DomainResult<Self> {
        if pixels.len() != width * height {
            return Err(DomainError::PixelCount {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixel(&self, index: usize) -> Option<u8> {
        self.pixels.get(index).copied()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Index-aligned images and labels: `labels[i]` belongs to `images[i]`.
///
/// All images share the dimensions of the first one and every label is
/// below [`NUM_LABELS`]. The dataset is read-only once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    images: Vec<Image>,
    labels: Vec<u8>,
}

impl Dataset {
    pub fn new(images: Vec<Image>, labels: Vec<u8>) -> DomainResult<Self> {
        if images.len() != labels.len() {
            return Err(DomainError::Misaligned {
                images: images.len(),
                labels: labels.len(),
            });
        }
        if let Some((index, &label)) = labels.iter().enumerate().find(|&(_, &l)| l > MAX_LABEL) {
            return Err(DomainError::InvalidLabel {
                index,
                label,
                max: MAX_LABEL,
            });
        }
        if let Some(first) = images.first() {
            let (width, height) = (first.width(), first.height());
            if let Some((index, image)) = images
                .iter()
                .enumerate()
                .find(|(_, img)| img.width() != width || img.height() != height)
            {
                return Err(DomainError::DimensionMismatch {
                    index,
                    width,
                    height,
                    actual_width: image.width(),
                    actual_height: image.height(),
                });
            }
        }
        Ok(Self { images, labels })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn image(&self, index: usize) -> &Image {
        &self.images[index]
    }

    pub fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }

    /// `(width, height)` shared by every image, `None` for an empty dataset.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.images.first().map(|img| (img.width(), img.height()))
    }

    /// Number of candidate split pixels per image.
    pub fn pixel_count(&self) -> usize {
        self.images.first().map_or(0, Image::pixel_count)
    }

    /// Iterate `(image, label)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&Image, u8)> {
        self.images.iter().zip(self.labels.iter().copied())
    }
}
