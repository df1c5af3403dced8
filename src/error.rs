use crate::binarize::PreprocessVariant;
use crate::segment::CropBox;
use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failures raised by the recognition pipeline.
///
/// Inside a sweep none of these are fatal: `MissingInput` skips a
/// preprocessing path, anything else is wrapped in `ConfigurationFailure`
/// and recorded against the combination that raised it.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    #[error("source raster {} unavailable: {reason}", path.display())]
    MissingInput { path: PathBuf, reason: String },

    #[error("crop box #{index} {crop:?} is outside the {width}x{height} raster or empty")]
    InvalidCropBox {
        index: usize,
        crop: CropBox,
        width: usize,
        height: usize,
    },

    #[error("{boxes} crop boxes but {expected} expected digits")]
    ExpectedLengthMismatch { boxes: usize, expected: usize },

    #[error("{variant} T{threshold} failed: {source}")]
    ConfigurationFailure {
        variant: PreprocessVariant,
        threshold: u8,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, PipelineError::MissingInput { .. })
    }
}
