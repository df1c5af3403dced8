//! Grayscale → binary conversion.
//!
//! Four preprocessing variants share one contract: a sample is `PAPER` when
//! its (possibly pre-filtered) intensity exceeds the effective threshold,
//! `INK` otherwise. Variants differ in pre-filter, threshold rule, and whether
//! the binary result is opened afterwards:
//!
//! | variant        | pre-filter    | threshold                  | opening |
//! |----------------|---------------|----------------------------|---------|
//! | `Adaptive`     | none          | between-class variance max | yes     |
//! | `Simple`       | 3×3 median    | fixed                      | yes     |
//! | `Gaussian`     | σ=1 Gaussian  | fixed                      | yes     |
//! | `Conservative` | none          | fixed                      | no      |
//!
//! Dispatch goes through a static strategy table indexed by the variant.

pub mod filters;
pub mod morphology;
pub mod preprocess;
pub mod threshold;

pub use preprocess::{preprocess, Preprocessed, RasterSource};

use crate::image::{BinaryImage, GrayImageU8, ImageU8, ImageView};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preprocessing strategy identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreprocessVariant {
    Adaptive,
    Simple,
    Gaussian,
    Conservative,
}

impl PreprocessVariant {
    pub const ALL: [PreprocessVariant; 4] = [
        PreprocessVariant::Adaptive,
        PreprocessVariant::Simple,
        PreprocessVariant::Gaussian,
        PreprocessVariant::Conservative,
    ];

    pub fn label(self) -> &'static str {
        self.strategy().label
    }

    fn strategy(self) -> &'static BinarizeStrategy {
        &STRATEGIES[self as usize]
    }
}

impl fmt::Display for PreprocessVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug)]
enum PreFilter {
    None,
    Median3,
    Gaussian,
}

#[derive(Clone, Copy, Debug)]
enum ThresholdRule {
    Fixed,
    BetweenClassVariance,
}

#[derive(Debug)]
struct BinarizeStrategy {
    label: &'static str,
    prefilter: PreFilter,
    rule: ThresholdRule,
    open: bool,
}

// Order matches the `PreprocessVariant` discriminants.
static STRATEGIES: [BinarizeStrategy; 4] = [
    BinarizeStrategy {
        label: "Enhanced Adaptive",
        prefilter: PreFilter::None,
        rule: ThresholdRule::BetweenClassVariance,
        open: true,
    },
    BinarizeStrategy {
        label: "Simple Median",
        prefilter: PreFilter::Median3,
        rule: ThresholdRule::Fixed,
        open: true,
    },
    BinarizeStrategy {
        label: "Gaussian Blur",
        prefilter: PreFilter::Gaussian,
        rule: ThresholdRule::Fixed,
        open: true,
    },
    BinarizeStrategy {
        label: "Conservative",
        prefilter: PreFilter::None,
        rule: ThresholdRule::Fixed,
        open: false,
    },
];

/// Binary raster plus the threshold actually applied.
#[derive(Clone, Debug)]
pub struct Binarized {
    pub image: BinaryImage,
    pub effective_threshold: u8,
}

/// Binarize `raster` with `variant`. `threshold` is the requested value; the
/// adaptive variant only uses it as a fallback.
pub fn binarize(raster: ImageU8<'_>, variant: PreprocessVariant, threshold: u8) -> Binarized {
    let strategy = variant.strategy();

    let effective_threshold = match strategy.rule {
        ThresholdRule::Fixed => threshold,
        ThresholdRule::BetweenClassVariance => {
            threshold::select_threshold(&raster.histogram(), threshold)
        }
    };

    let filtered: Option<GrayImageU8> = match strategy.prefilter {
        PreFilter::None => None,
        PreFilter::Median3 => Some(filters::median3(raster)),
        PreFilter::Gaussian => Some(filters::gaussian_blur(
            raster,
            &filters::GAUSSIAN_SIGMA1,
        )),
    };
    let source = filtered.as_ref().map_or(raster, GrayImageU8::as_view);

    let mut image = threshold_image(source, effective_threshold);
    if strategy.open {
        image = morphology::open(&image);
    }

    Binarized {
        image,
        effective_threshold,
    }
}

/// Plain global threshold: `PAPER` where `value > t`.
pub fn threshold_image(raster: ImageU8<'_>, t: u8) -> BinaryImage {
    BinaryImage::from_paper_mask(
        raster.w,
        raster.h,
        raster.rows().flat_map(|row| row.iter().map(move |&v| v > t)),
    )
}
