//! Weighted global score aggregation.

use crate::report::ScoreMap;

/// Category weights for the global composite. These encode policy, not
/// mechanism: performance and accessibility carry the report, SEO matters
/// somewhat less, and security and responsiveness act as modifiers. They
/// must sum to 1.0.
pub const PERF_WEIGHT: f64 = 0.30;
pub const A11Y_WEIGHT: f64 = 0.30;
pub const SEO_WEIGHT: f64 = 0.20;
pub const SECURITY_WEIGHT: f64 = 0.15;
pub const RESPONSIVE_WEIGHT: f64 = 0.05;

/// Compute the weighted global composite, rounded to one decimal.
///
/// A category no tool scored contributes its initial 0 at full weight; the
/// result cannot tell "untested" apart from "failed".
pub fn finalize(score: &mut ScoreMap) {
    let global = score.perf * PERF_WEIGHT
        + score.a11y * A11Y_WEIGHT
        + score.seo * SEO_WEIGHT
        + score.security * SECURITY_WEIGHT
        + score.responsive * RESPONSIVE_WEIGHT;
    score.global = round1(global);
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total =
            PERF_WEIGHT + A11Y_WEIGHT + SEO_WEIGHT + SECURITY_WEIGHT + RESPONSIVE_WEIGHT;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_global() {
        let mut score = ScoreMap {
            perf: 85.0,
            a11y: 90.0,
            seo: 80.0,
            security: 0.0,
            responsive: 0.0,
            global: 0.0,
        };
        finalize(&mut score);
        assert_eq!(score.global, 68.5);
    }

    #[test]
    fn test_perfect_scores_round_trip() {
        let mut score = ScoreMap {
            perf: 100.0,
            a11y: 100.0,
            seo: 100.0,
            security: 100.0,
            responsive: 100.0,
            global: 0.0,
        };
        finalize(&mut score);
        assert_eq!(score.global, 100.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let mut score = ScoreMap {
            perf: 33.33,
            a11y: 33.33,
            seo: 33.33,
            security: 33.33,
            responsive: 33.33,
            global: 0.0,
        };
        finalize(&mut score);
        assert_eq!(score.global, 33.3);
    }
}
