//! Exhaustive parameter sweep against a known reference code.
//!
//! For every `(preprocessing variant, threshold)` pair the source raster is
//! binarized and cut into glyphs once; every `(hole variant, min hole size)`
//! pair is then scored against the expected code. Pairs are independent and
//! only read the shared source, so with the `parallel` feature they run on
//! the rayon pool; partial result lists are merged in enumeration order so
//! ranking is identical to the serial path.
//!
//! Failures never abort the sweep. A missing source skips the pair; any other
//! error is logged with the pair's parameters and recorded in the report.

mod options;
mod report;

pub use options::SweepOptions;
pub use report::{AccuracyTier, FailureKind, SweepFailure, SweepReport};

use crate::binarize::{preprocess, PreprocessVariant, RasterSource};
use crate::classify::{classify, ClassificationOutcome, UNKNOWN_MARKER};
use crate::diagnostics::{StageTiming, TimingBreakdown};
use crate::error::PipelineError;
use crate::holes::{count_holes, HoleVariant};
use crate::segment::{label_glyphs, CropBox, DigitGlyph};
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// One concrete point of the sweep grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfiguration {
    pub preprocessing: PreprocessVariant,
    pub threshold: u8,
    pub effective_threshold: u8,
    pub hole_counting: HoleVariant,
    pub min_hole_size: usize,
}

impl fmt::Display for SweepConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} T{}", self.preprocessing, self.threshold)?;
        if self.effective_threshold != self.threshold {
            write!(f, "(={})", self.effective_threshold)?;
        }
        write!(f, " {} H{}", self.hole_counting, self.min_hole_size)
    }
}

/// Scored outcome of one configuration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResult {
    #[serde(flatten)]
    pub config: SweepConfiguration,
    pub code: String,
    /// Percentage of glyphs recognized as their expected digit.
    pub accuracy: f64,
    pub tier: AccuracyTier,
    pub outcomes: Vec<ClassificationOutcome>,
    pub details: Vec<String>,
}

impl SweepResult {
    pub fn unknown_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_unknown()).count()
    }
}

/// Count holes and classify every glyph of one configuration against the
/// glyph's own expected digit. Unlabelled glyphs score as unknown.
pub fn evaluate_configuration(config: SweepConfiguration, glyphs: &[DigitGlyph]) -> SweepResult {
    let mut outcomes = Vec::with_capacity(glyphs.len());
    let mut details = Vec::with_capacity(glyphs.len());
    let mut correct = 0usize;

    for glyph in glyphs {
        let holes = count_holes(&glyph.image, config.hole_counting, config.min_hole_size);
        let recognized = match glyph.expected {
            Some(digit) => classify(holes, digit),
            None => UNKNOWN_MARKER,
        };
        if glyph.expected == Some(recognized) {
            correct += 1;
        }
        details.push(format!(
            "Pos{}({}): {holes}h→{recognized}",
            glyph.index + 1,
            glyph.expected.unwrap_or(UNKNOWN_MARKER)
        ));
        outcomes.push(ClassificationOutcome {
            glyph_index: glyph.index,
            hole_count: holes,
            recognized,
        });
    }

    let accuracy = if glyphs.is_empty() {
        0.0
    } else {
        correct as f64 / glyphs.len() as f64 * 100.0
    };
    SweepResult {
        config,
        code: outcomes.iter().map(|o| o.recognized).collect(),
        accuracy,
        tier: AccuracyTier::from_accuracy(accuracy),
        outcomes,
        details,
    }
}

/// Sort best-first: higher accuracy, then fewer unknown markers. Stable, so
/// equal entries keep enumeration order.
pub fn rank_results(results: &mut [SweepResult]) {
    results.sort_by(|a, b| {
        b.accuracy
            .total_cmp(&a.accuracy)
            .then_with(|| a.unknown_count().cmp(&b.unknown_count()))
    });
}

/// Drives the sweep over a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct SweepRunner {
    options: SweepOptions,
}

struct PairOutcome {
    results: Vec<SweepResult>,
    failure: Option<SweepFailure>,
    timing: StageTiming,
}

impl SweepRunner {
    pub fn new(options: SweepOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    /// Run the full grid. Only a box/code length mismatch is an error here;
    /// per-pair failures end up in `SweepReport::failures`.
    pub fn run(
        &self,
        source: &RasterSource,
        boxes: &[CropBox],
        expected_code: &str,
    ) -> Result<SweepReport, PipelineError> {
        let expected: Vec<char> = expected_code.chars().collect();
        if expected.len() != boxes.len() {
            return Err(PipelineError::ExpectedLengthMismatch {
                boxes: boxes.len(),
                expected: expected.len(),
            });
        }

        let start = Instant::now();
        let pairs: Vec<(PreprocessVariant, u8)> = self
            .options
            .variants
            .iter()
            .flat_map(|&v| self.options.thresholds.iter().map(move |&t| (v, t)))
            .collect();

        let outcomes = self.evaluate_pairs(&pairs, source, boxes, &expected);

        let mut results = Vec::with_capacity(self.options.combination_count());
        let mut failures = Vec::new();
        let mut timing = TimingBreakdown::default();
        for outcome in outcomes {
            results.extend(outcome.results);
            failures.extend(outcome.failure);
            timing.push(outcome.timing);
        }
        rank_results(&mut results);
        timing.total_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "sweep finished: {} results, {} failed pairs, {:.1} ms",
            results.len(),
            failures.len(),
            timing.total_ms
        );

        Ok(SweepReport {
            expected_code: expected_code.to_string(),
            results,
            failures,
            timing,
            top_n: self.options.top_n,
            accuracy_floor: self.options.accuracy_floor,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_pairs(
        &self,
        pairs: &[(PreprocessVariant, u8)],
        source: &RasterSource,
        boxes: &[CropBox],
        expected: &[char],
    ) -> Vec<PairOutcome> {
        pairs
            .iter()
            .map(|&(variant, threshold)| {
                self.evaluate_pair(variant, threshold, source, boxes, expected)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_pairs(
        &self,
        pairs: &[(PreprocessVariant, u8)],
        source: &RasterSource,
        boxes: &[CropBox],
        expected: &[char],
    ) -> Vec<PairOutcome> {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(variant, threshold)| {
                self.evaluate_pair(variant, threshold, source, boxes, expected)
            })
            .collect()
    }

    fn evaluate_pair(
        &self,
        variant: PreprocessVariant,
        threshold: u8,
        source: &RasterSource,
        boxes: &[CropBox],
        expected: &[char],
    ) -> PairOutcome {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut failure = None;

        match preprocess(source, boxes, variant, threshold) {
            Ok(pre) => {
                let glyphs = label_glyphs(pre.glyphs, expected);
                for &hole_counting in &self.options.hole_variants {
                    for &min_hole_size in &self.options.min_hole_sizes {
                        let config = SweepConfiguration {
                            preprocessing: variant,
                            threshold,
                            effective_threshold: pre.effective_threshold,
                            hole_counting,
                            min_hole_size,
                        };
                        let result = evaluate_configuration(config, &glyphs);
                        debug!("{config}: code {} ({:.1}%)", result.code, result.accuracy);
                        results.push(result);
                    }
                }
            }
            Err(err) if err.is_missing_input() => {
                failure = Some(SweepFailure::new(
                    variant,
                    threshold,
                    FailureKind::MissingInput,
                    &err,
                ));
            }
            Err(err) => {
                let err = PipelineError::ConfigurationFailure {
                    variant,
                    threshold,
                    source: Box::new(err),
                };
                warn!("skipping: {err}");
                failure = Some(SweepFailure::new(
                    variant,
                    threshold,
                    FailureKind::Configuration,
                    &err,
                ));
            }
        }

        PairOutcome {
            results,
            failure,
            timing: StageTiming::since(format!("{variant} T{threshold}"), start),
        }
    }
}

#[cfg(test)]
mod tests;
