//! Load-checked preprocessing: binarize the source raster and cut glyphs.

use super::{binarize, PreprocessVariant};
use crate::error::PipelineError;
use crate::image::io::load_grayscale_image;
use crate::image::{BinaryImage, GrayImageU8, ImageU8};
use crate::segment::{segment, CropBox, DigitGlyph};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Explicit source raster for every preprocessing call.
///
/// Decoding happens once, up front. A source that failed to load stays in
/// the `Unavailable` state and each preprocessing call reports it as
/// `MissingInput` instead of falling back to some other file.
#[derive(Clone, Debug)]
pub enum RasterSource {
    Decoded(GrayImageU8),
    Unavailable { path: PathBuf, reason: String },
}

impl RasterSource {
    /// Decode `path` into a grayscale raster, remembering any failure.
    pub fn open(path: &Path) -> Self {
        match load_grayscale_image(path) {
            Ok(image) => RasterSource::Decoded(image),
            Err(PipelineError::MissingInput { path, reason }) => {
                RasterSource::Unavailable { path, reason }
            }
            Err(other) => RasterSource::Unavailable {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }

    pub fn view(&self) -> Result<ImageU8<'_>, PipelineError> {
        match self {
            RasterSource::Decoded(image) => Ok(image.as_view()),
            RasterSource::Unavailable { path, reason } => Err(PipelineError::MissingInput {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RasterSource::Decoded(_))
    }
}

impl From<GrayImageU8> for RasterSource {
    fn from(image: GrayImageU8) -> Self {
        RasterSource::Decoded(image)
    }
}

/// Output of one preprocessing call.
#[derive(Clone, Debug)]
pub struct Preprocessed {
    pub binary: BinaryImage,
    pub glyphs: Vec<DigitGlyph>,
    pub effective_threshold: u8,
}

/// Binarize `source` with `variant` and crop one glyph per box.
///
/// A missing source yields `MissingInput` (logged here, once per call); no
/// glyphs are produced for that path.
pub fn preprocess(
    source: &RasterSource,
    boxes: &[CropBox],
    variant: PreprocessVariant,
    threshold: u8,
) -> Result<Preprocessed, PipelineError> {
    let raster = source.view().inspect_err(|err| {
        warn!("{variant} T{threshold}: {err}");
    })?;
    let binarized = binarize(raster, variant, threshold);
    let glyphs = segment(&binarized.image, boxes)?;
    debug!(
        "{variant} T{threshold}: effective threshold {}, {} glyphs",
        binarized.effective_threshold,
        glyphs.len()
    );
    Ok(Preprocessed {
        binary: binarized.image,
        glyphs,
        effective_threshold: binarized.effective_threshold,
    })
}
