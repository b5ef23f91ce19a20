//! Weighted Gini impurity of a candidate split.

use crate::domain::image::{Dataset, NUM_LABELS};

/// Intensity at or above which a pixel counts as "on" when scoring a split.
pub const SCORE_THRESHOLD: u8 = 128;

/// Weighted Gini impurity of the children formed by splitting `indices` on `pixel`.
///
/// The referenced images fall into group A (pixel value below
/// [`SCORE_THRESHOLD`]) or group B (at or above it). Each group scores
/// `1 - sum(p_i^2)` over the label proportions `p_i` in that group, computed
/// as `sum(p_i * (1 - p_i))`; an empty group scores 0. The result is the
/// size-weighted mean of both scores, so it lies in `[0, 1)` and lower is
/// better.
///
/// `indices` must be non-empty and every index must be valid for `data`.
pub fn split_gini_impurity(data: &Dataset, indices: &[usize], pixel: usize) -> f64 {
    let mut a_freq = [0usize; NUM_LABELS];
    let mut b_freq = [0usize; NUM_LABELS];
    let (mut a_count, mut b_count) = (0usize, 0usize);

    for &idx in indices {
        let label = usize::from(data.label(idx));
        // Pixels are nominally 0 or 255; the midpoint keeps scoring general.
        if data.image(idx).pixels()[pixel] < SCORE_THRESHOLD {
            a_freq[label] += 1;
            a_count += 1;
        } else {
            b_freq[label] += 1;
            b_count += 1;
        }
    }

    let a_gini = group_gini(&a_freq, a_count);
    let b_gini = group_gini(&b_freq, b_count);
    (a_gini * a_count as f64 + b_gini * b_count as f64) / indices.len() as f64
}

fn group_gini(freq: &[usize; NUM_LABELS], count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f64;
    freq.iter()
        .map(|&f| {
            let p = f as f64 / count;
            p * (1.0 - p)
        })
        .sum()
}
