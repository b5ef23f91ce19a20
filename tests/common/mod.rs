//! Shared fixtures: synthetic datasets and dataset files on disk.
#![allow(dead_code)]

use std::path::PathBuf;

use dectree::infrastructure::{IMAGE_HEIGHT, IMAGE_WIDTH};
use dectree::{Dataset, Image};
use tempfile::TempDir;

pub const PIXELS: usize = IMAGE_WIDTH * IMAGE_HEIGHT;

/// Encode `(label, pixels)` records in the on-disk dataset layout.
pub fn encode(examples: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut bytes = (examples.len() as i32).to_ne_bytes().to_vec();
    for (label, pixels) in examples {
        assert_eq!(pixels.len(), PIXELS, "fixture images must be 28x28");
        bytes.push(*label);
        bytes.extend_from_slice(pixels);
    }
    bytes
}

pub fn write_dataset(dir: &TempDir, name: &str, examples: &[(u8, Vec<u8>)]) -> PathBuf {
    write_bytes(dir, name, &encode(examples))
}

pub fn write_bytes(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write dataset file");
    path
}

pub fn to_dataset(width: usize, height: usize, examples: &[(u8, Vec<u8>)]) -> Dataset {
    let images = examples
        .iter()
        .map(|(_, px)| Image::new(width, height, px.clone()).expect("fixture image"))
        .collect();
    let labels = examples.iter().map(|(l, _)| *l).collect();
    Dataset::new(images, labels).expect("fixture dataset")
}

/// Small deterministic generator so fixtures are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

/// Random images with pixels drawn from {0, 255} and labels from `0..labels`.
pub fn random_binary_examples(
    seed: u64,
    count: usize,
    pixels: usize,
    labels: u8,
) -> Vec<(u8, Vec<u8>)> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| {
            let label = rng.below(u32::from(labels)) as u8;
            let px = (0..pixels)
                .map(|_| if rng.below(2) == 0 { 0 } else { 255 })
                .collect();
            (label, px)
        })
        .collect()
}

/// Digit-like 28x28 examples: each label has a fixed random prototype and
/// every example flips a few of its pixels.
pub fn prototype_examples(seed: u64, count: usize, flip_per_mille: u32) -> Vec<(u8, Vec<u8>)> {
    let mut rng = Lcg::new(seed);
    let prototypes: Vec<Vec<u8>> = (0..10)
        .map(|_| {
            (0..PIXELS)
                .map(|_| if rng.below(2) == 0 { 0 } else { 255 })
                .collect()
        })
        .collect();
    (0..count)
        .map(|_| {
            let label = rng.below(10) as u8;
            let px = prototypes[usize::from(label)]
                .iter()
                .map(|&p| {
                    if rng.below(1000) < flip_per_mille {
                        255 - p
                    } else {
                        p
                    }
                })
                .collect();
            (label, px)
        })
        .collect()
}
