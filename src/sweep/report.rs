use super::SweepResult;
use crate::binarize::PreprocessVariant;
use crate::diagnostics::TimingBreakdown;
use crate::error::PipelineError;
use serde::Serialize;
use std::fmt;

/// Coarse accuracy bucket used when summarizing results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    Poor,
    Fair,
    Good,
    Perfect,
}

impl AccuracyTier {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 100.0 {
            AccuracyTier::Perfect
        } else if accuracy >= 83.0 {
            AccuracyTier::Good
        } else if accuracy >= 66.0 {
            AccuracyTier::Fair
        } else {
            AccuracyTier::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccuracyTier::Perfect => "perfect",
            AccuracyTier::Good => "good",
            AccuracyTier::Fair => "fair",
            AccuracyTier::Poor => "poor",
        }
    }
}

impl fmt::Display for AccuracyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingInput,
    Configuration,
}

/// A `(preprocessing, threshold)` pair that produced no results.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepFailure {
    pub preprocessing: PreprocessVariant,
    pub threshold: u8,
    pub kind: FailureKind,
    pub message: String,
}

impl SweepFailure {
    pub(super) fn new(
        preprocessing: PreprocessVariant,
        threshold: u8,
        kind: FailureKind,
        err: &PipelineError,
    ) -> Self {
        Self {
            preprocessing,
            threshold,
            kind,
            message: err.to_string(),
        }
    }
}

/// Ranked sweep output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub expected_code: String,
    /// All results, best first.
    pub results: Vec<SweepResult>,
    pub failures: Vec<SweepFailure>,
    /// Whole-sweep wall time plus one stage per `(preprocessing, threshold)`.
    pub timing: TimingBreakdown,
    pub top_n: usize,
    pub accuracy_floor: f64,
}

impl SweepReport {
    pub fn best(&self) -> Option<&SweepResult> {
        self.results.first()
    }

    /// The first `top_n` ranked results that reach the accuracy floor.
    pub fn top(&self) -> Vec<&SweepResult> {
        self.results
            .iter()
            .take(self.top_n)
            .filter(|r| r.accuracy >= self.accuracy_floor)
            .collect()
    }

    /// Highest-ranked result for each preprocessing variant, in rank order.
    pub fn best_per_variant(&self) -> Vec<&SweepResult> {
        let mut seen: Vec<PreprocessVariant> = Vec::new();
        let mut best = Vec::new();
        for result in &self.results {
            if !seen.contains(&result.config.preprocessing) {
                seen.push(result.config.preprocessing);
                best.push(result);
            }
        }
        best
    }

    pub fn perfect_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.tier == AccuracyTier::Perfect)
            .count()
    }
}
