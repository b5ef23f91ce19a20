//! Split selection and majority voting over an index subset.

use tracing::{instrument, trace};

use crate::domain::image::{Dataset, NUM_LABELS};
use crate::domain::impurity::split_gini_impurity;

/// Pixel whose split yields the lowest weighted Gini impurity.
///
/// Every pixel position is scored in increasing order and the running
/// minimum only moves on a strictly lower score, so ties go to the smallest
/// pixel index. `indices` must be non-empty.
#[instrument(level = "trace", skip(data, indices), fields(m = indices.len()))]
pub fn find_best_split(data: &Dataset, indices: &[usize]) -> usize {
    let mut best_pixel = 0;
    let mut best_gini = f64::INFINITY;
    for pixel in 0..data.pixel_count() {
        let gini = split_gini_impurity(data, indices, pixel);
        if gini < best_gini {
            best_gini = gini;
            best_pixel = pixel;
        }
    }
    trace!(best_pixel, best_gini, "split selected");
    best_pixel
}

/// Lowest-impurity pixel among those that actually separate `indices`.
///
/// A pixel separates the subset when at least one referenced image has value
/// 0 there and at least one does not. Ties go to the smallest pixel index.
/// Returns `None` when no pixel separates the subset, i.e. every image agrees
/// on which pixels are zero.
#[instrument(level = "trace", skip(data, indices), fields(m = indices.len()))]
pub fn find_best_separating_split(data: &Dataset, indices: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for pixel in 0..data.pixel_count() {
        let zeros = indices
            .iter()
            .filter(|&&idx| data.image(idx).pixels()[pixel] == 0)
            .count();
        if zeros == 0 || zeros == indices.len() {
            continue;
        }
        let gini = split_gini_impurity(data, indices, pixel);
        if best.map_or(true, |(_, best_gini)| gini < best_gini) {
            best = Some((pixel, gini));
        }
    }
    best.map(|(pixel, _)| pixel)
}

/// Most frequent label among `indices` and how often it occurs.
///
/// Labels are scanned 0..=9 and the running best only moves on a strictly
/// higher count, so ties go to the smallest label.
pub fn most_frequent(data: &Dataset, indices: &[usize]) -> (u8, usize) {
    let mut counts = [0usize; NUM_LABELS];
    for &idx in indices {
        counts[usize::from(data.label(idx))] += 1;
    }

    let mut label = 0;
    let mut freq = counts[0];
    for (candidate, &count) in counts.iter().enumerate().skip(1) {
        if count > freq {
            freq = count;
            label = candidate;
        }
    }
    (label as u8, freq)
}
