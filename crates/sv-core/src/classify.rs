use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_RATIO, LOW_RATIO};

/// Bucket for the ratio of two scalars against the fixed thresholds.
///
/// `High` means the numerator dominates by more than three orders of
/// magnitude, `Low` means the denominator dominates by more than two;
/// everything in between is the transitional band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Low,
    Transitional,
    High,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Transitional => "transitional",
            Self::High => "high",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Transitional,
        }
    }

    /// One-line reading of what the bucket means for a scale analysis.
    pub fn diagnosis(&self) -> &'static str {
        match self {
            Self::High => "information term dominates physical form",
            Self::Low => "physical mass enforces absolute certainty",
            Self::Transitional => "terms in conflict; high capacity for emergent complexity",
        }
    }
}

/// Ratio of `a` to `b` with an explicit zero-denominator branch.
///
/// A zero denominator yields +∞ rather than relying on platform float
/// division, so the caller always gets a bucketable value.
pub fn ratio(a: f64, b: f64) -> f64 {
    if b == 0.0 { f64::INFINITY } else { a / b }
}

/// Bucket a precomputed ratio: > 1000 High, < 0.01 Low, else Transitional.
pub fn classify(ratio: f64) -> Classification {
    if ratio > HIGH_RATIO {
        Classification::High
    } else if ratio < LOW_RATIO {
        Classification::Low
    } else {
        Classification::Transitional
    }
}

/// Compute and bucket `a / b` in one step. Never fails: `b == 0` maps to +∞.
pub fn classify_ratio(a: f64, b: f64) -> (f64, Classification) {
    let r = ratio(a, b);
    (r, classify(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_is_high() {
        let (r, c) = classify_ratio(1.0, 0.0);
        assert!(r.is_infinite());
        assert_eq!(c, Classification::High);
    }

    #[test]
    fn test_threshold_buckets() {
        assert_eq!(classify_ratio(1e-7, 1e-12).1, Classification::High);
        assert_eq!(classify_ratio(1e-10, 1e-10).1, Classification::Transitional);
        assert_eq!(classify_ratio(1e-13, 1e-7).1, Classification::Low);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly at a threshold stays transitional
        assert_eq!(classify(1000.0), Classification::Transitional);
        assert_eq!(classify(0.01), Classification::Transitional);
        assert_eq!(classify(1000.0001), Classification::High);
        assert_eq!(classify(0.0099), Classification::Low);
    }

    #[test]
    fn test_scale_invariance() {
        let (r1, c1) = classify_ratio(3.0e-7, 2.0e-10);
        let (r2, c2) = classify_ratio(3.0e-7 * 50.0, 2.0e-10 * 50.0);
        assert!((r1 - r2).abs() / r1 < 1e-12);
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_round_trip_labels() {
        for c in [
            Classification::Low,
            Classification::Transitional,
            Classification::High,
        ] {
            assert_eq!(Classification::from_str_lossy(c.as_str()), c);
        }
        assert_eq!(
            Classification::from_str_lossy("garbage"),
            Classification::Transitional
        );
    }
}
