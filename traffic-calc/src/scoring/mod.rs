// traffic-calc/src/scoring/mod.rs

use crate::Score;

/// Combines parallel slices of weights and scores into their weighted arithmetic mean.
///
/// Only matched pairs contribute; trailing entries of the longer slice are ignored.
/// A non-positive total weight yields 0.0. With every score in `[0, 1]` the result
/// stays in `[0, 1]`.
pub fn aggregate(weights: &[f64], scores: &[Score]) -> Score {
    let (weighted_sum, total_weight) = weights
        .iter()
        .zip(scores)
        .fold((0.0, 0.0), |(sum, total), (&weight, &score)| {
            (sum + weight * score, total + weight)
        });

    if total_weight <= 0.0 {
        return 0.0;
    }

    weighted_sum / total_weight
}
