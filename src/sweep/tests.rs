use super::*;
use crate::classify::UNKNOWN_MARKER;
use crate::image::{BinaryImage, GrayImageU8, PAPER};
use std::path::Path;

fn config(threshold: u8) -> SweepConfiguration {
    SweepConfiguration {
        preprocessing: PreprocessVariant::Conservative,
        threshold,
        effective_threshold: threshold,
        hole_counting: HoleVariant::Robust,
        min_hole_size: 5,
    }
}

fn result(threshold: u8, accuracy: f64, code: &str) -> SweepResult {
    let outcomes = code
        .chars()
        .enumerate()
        .map(|(i, c)| ClassificationOutcome {
            glyph_index: i,
            hole_count: 0,
            recognized: c,
        })
        .collect();
    SweepResult {
        config: config(threshold),
        code: code.to_string(),
        accuracy,
        tier: AccuracyTier::from_accuracy(accuracy),
        outcomes,
        details: Vec::new(),
    }
}

#[test]
fn higher_accuracy_ranks_first_regardless_of_insertion() {
    for order in [[0usize, 1], [1, 0]] {
        let pool = [result(100, 100.0, "184325"), result(120, 83.3, "18432?")];
        let mut results: Vec<SweepResult> = order.iter().map(|&i| pool[i].clone()).collect();
        rank_results(&mut results);
        assert_eq!(results[0].accuracy, 100.0);
        assert_eq!(results[0].config.threshold, 100);
    }
}

#[test]
fn equal_accuracy_prefers_fewer_unknowns() {
    let mut results = vec![result(100, 100.0, "1?4?25"), result(150, 100.0, "18432?")];
    rank_results(&mut results);
    assert_eq!(results[0].config.threshold, 150);
    assert_eq!(results[0].unknown_count(), 1);
    assert_eq!(results[1].unknown_count(), 2);
}

#[test]
fn equal_entries_keep_enumeration_order() {
    let mut results = vec![result(100, 50.0, "1??3??"), result(120, 50.0, "1??3??")];
    rank_results(&mut results);
    assert_eq!(results[0].config.threshold, 100);
}

#[test]
fn evaluate_configuration_assembles_code_and_details() {
    // Plain paper glyphs have no holes: "1" matches, "0" does not.
    let glyphs = vec![
        DigitGlyph::new(0, BinaryImage::filled(8, 8, PAPER)).with_expected('1'),
        DigitGlyph::new(1, BinaryImage::filled(8, 8, PAPER)).with_expected('0'),
    ];
    let out = evaluate_configuration(config(128), &glyphs);
    assert_eq!(out.code, format!("1{UNKNOWN_MARKER}"));
    assert_eq!(out.accuracy, 50.0);
    assert_eq!(out.unknown_count(), 1);
    assert_eq!(out.details[0], "Pos1(1): 0h→1");
    assert_eq!(out.details[1], "Pos2(0): 0h→?");
}

#[test]
fn unlabelled_glyph_scores_as_unknown() {
    let glyphs = vec![
        DigitGlyph::new(0, BinaryImage::filled(8, 8, PAPER)).with_expected('7'),
        DigitGlyph::new(1, BinaryImage::filled(8, 8, PAPER)),
    ];
    let out = evaluate_configuration(config(128), &glyphs);
    assert_eq!(out.code, format!("7{UNKNOWN_MARKER}"));
    assert_eq!(out.accuracy, 50.0);
    assert_eq!(out.details[1], "Pos2(?): 0h→?");
}

#[test]
fn sweep_scores_glyphs_against_their_own_labels() {
    // Same blank glyphs, different expected codes: only the label decides.
    let source = RasterSource::from(GrayImageU8::new(16, 16, vec![220; 256]));
    let boxes = [CropBox::new(0, 0, 8, 16), CropBox::new(8, 0, 16, 16)];
    let runner = SweepRunner::new(SweepOptions {
        variants: vec![PreprocessVariant::Conservative],
        thresholds: vec![128],
        hole_variants: vec![HoleVariant::Robust],
        min_hole_sizes: vec![5],
        ..Default::default()
    });
    let hit = runner.run(&source, &boxes, "17").unwrap();
    assert_eq!(hit.results[0].code, "17");
    let miss = runner.run(&source, &boxes, "10").unwrap();
    assert_eq!(miss.results[0].code, format!("1{UNKNOWN_MARKER}"));
    assert_eq!(miss.results[0].details[1], "Pos2(0): 0h→?");
}

#[test]
fn missing_source_skips_every_pair_without_aborting() {
    let source = RasterSource::open(Path::new("no/such/rectified.bmp"));
    let report = SweepRunner::default()
        .run(&source, &CropBox::keypad_defaults(), "184325")
        .expect("sweep itself should not fail");
    assert!(report.results.is_empty());
    assert_eq!(report.failures.len(), 4 * 5);
    assert!(report
        .failures
        .iter()
        .all(|f| f.kind == FailureKind::MissingInput));
    assert!(report.best().is_none());
}

#[test]
fn bad_crop_box_is_recorded_as_configuration_failure() {
    let source = RasterSource::from(GrayImageU8::new(20, 20, vec![200; 400]));
    let runner = SweepRunner::new(SweepOptions {
        variants: vec![PreprocessVariant::Conservative],
        thresholds: vec![128],
        ..Default::default()
    });
    let boxes = [CropBox::new(0, 0, 10, 10), CropBox::new(10, 10, 30, 20)];
    let report = runner.run(&source, &boxes, "17").unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Configuration);
    assert!(report.failures[0].message.contains("crop box #1"));
}

#[test]
fn code_length_must_match_boxes() {
    let source = RasterSource::from(GrayImageU8::new(4, 4, vec![0; 16]));
    let err = SweepRunner::default()
        .run(&source, &[CropBox::new(0, 0, 2, 2)], "12")
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::ExpectedLengthMismatch {
            boxes: 1,
            expected: 2
        }
    ));
}

#[test]
fn sweep_enumerates_full_grid_per_pair() {
    let source = RasterSource::from(GrayImageU8::new(16, 16, vec![220; 256]));
    let runner = SweepRunner::new(SweepOptions {
        thresholds: vec![100, 128],
        ..Default::default()
    });
    let report = runner
        .run(&source, &[CropBox::new(0, 0, 8, 16), CropBox::new(8, 0, 16, 16)], "71")
        .unwrap();
    assert_eq!(report.results.len(), 4 * 2 * 2 * 4);
    assert_eq!(report.timing.stages.len(), 4 * 2);
    assert_eq!(report.timing.stages[0].label, "Enhanced Adaptive T100");
    assert_eq!(report.timing.stages[7].label, "Conservative T128");
    assert!(report.timing.total_ms >= 0.0);
    assert!(report.failures.is_empty());
    assert!(report.results.iter().all(|r| r.code == "71"));
    assert_eq!(report.best_per_variant().len(), 4);
    assert_eq!(report.top().len(), 3);
}
