#![doc = include_str!("../README.md")]

// Pipeline stages, leaf-first.
pub mod binarize;
pub mod classify;
pub mod holes;
pub mod image;
pub mod segment;
pub mod sweep;

pub mod config;
pub mod diagnostics;
pub mod error;

// --- High-level re-exports -------------------------------------------------

pub use crate::binarize::{binarize, preprocess, Binarized, PreprocessVariant, RasterSource};
pub use crate::classify::{classify, ClassificationOutcome, UNKNOWN_MARKER};
pub use crate::error::PipelineError;
pub use crate::holes::{count_holes, HoleCounter, HoleVariant};
pub use crate::segment::{segment, CropBox, DigitGlyph};
pub use crate::sweep::{SweepOptions, SweepReport, SweepResult, SweepRunner};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use keypad_digits::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), keypad_digits::PipelineError> {
/// let source = RasterSource::open(Path::new("rectified.bmp"));
/// let report = SweepRunner::default().run(&source, &CropBox::keypad_defaults(), "184325")?;
/// if let Some(best) = report.best() {
///     println!("{best:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{CropBox, RasterSource, SweepOptions, SweepRunner};
}
