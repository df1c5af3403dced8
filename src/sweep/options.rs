use crate::binarize::PreprocessVariant;
use crate::holes::HoleVariant;
use serde::{Deserialize, Serialize};

/// Option sets enumerated by the sweep, plus report filtering.
///
/// The sweep evaluates the full cross-product
/// `variants × thresholds × hole_variants × min_hole_sizes`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    pub variants: Vec<PreprocessVariant>,
    /// Requested thresholds (the adaptive variant treats them as fallbacks).
    pub thresholds: Vec<u8>,
    pub hole_variants: Vec<HoleVariant>,
    pub min_hole_sizes: Vec<usize>,
    /// Number of top-ranked results surfaced in the summary.
    pub top_n: usize,
    /// Minimum accuracy (percent) for a top-ranked result to be surfaced.
    pub accuracy_floor: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            variants: PreprocessVariant::ALL.to_vec(),
            thresholds: vec![100, 120, 128, 150, 180],
            hole_variants: HoleVariant::ALL.to_vec(),
            min_hole_sizes: vec![3, 5, 8, 10],
            top_n: 3,
            accuracy_floor: 83.0,
        }
    }
}

impl SweepOptions {
    /// Number of configurations the sweep will attempt.
    pub fn combination_count(&self) -> usize {
        self.variants.len()
            * self.thresholds.len()
            * self.hole_variants.len()
            * self.min_hole_sizes.len()
    }
}
