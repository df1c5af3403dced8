//! Glyph segmentation: pure sub-raster extraction over caller-supplied boxes.

use crate::error::PipelineError;
use crate::image::BinaryImage;
use serde::{Deserialize, Serialize};

/// Axis-aligned crop bounds `(left, top, right, bottom)`, right/bottom exclusive.
///
/// Serialized as a `[left, top, right, bottom]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 4]", into = "[usize; 4]")]
pub struct CropBox {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CropBox {
    pub const fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the box is non-empty and lies inside a `width × height` raster.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }

    /// The six digit regions of the reference keypad camera setup.
    pub fn keypad_defaults() -> Vec<CropBox> {
        vec![
            CropBox::new(190, 250, 280, 420),
            CropBox::new(280, 240, 370, 410),
            CropBox::new(370, 240, 460, 410),
            CropBox::new(460, 240, 550, 410),
            CropBox::new(550, 240, 640, 410),
            CropBox::new(640, 240, 730, 410),
        ]
    }

    /// Central region kept when cropping a raw keypad photograph:
    /// `(w/5, h/4, 3w/4, 3h/4)`.
    pub fn central_region(width: usize, height: usize) -> CropBox {
        CropBox::new(width / 5, height / 4, 3 * width / 4, 3 * height / 4)
    }
}

impl From<[usize; 4]> for CropBox {
    fn from(v: [usize; 4]) -> Self {
        CropBox::new(v[0], v[1], v[2], v[3])
    }
}

impl From<CropBox> for [usize; 4] {
    fn from(b: CropBox) -> Self {
        [b.left, b.top, b.right, b.bottom]
    }
}

/// Binarized sub-image for one crop box, with optional ground truth.
#[derive(Clone, Debug)]
pub struct DigitGlyph {
    pub index: usize,
    pub image: BinaryImage,
    pub expected: Option<char>,
}

impl DigitGlyph {
    pub fn new(index: usize, image: BinaryImage) -> Self {
        Self {
            index,
            image,
            expected: None,
        }
    }

    pub fn with_expected(mut self, expected: char) -> Self {
        self.expected = Some(expected);
        self
    }
}

/// Pair glyphs with ground-truth digits by position. Surplus glyphs stay
/// unlabelled.
pub fn label_glyphs(glyphs: Vec<DigitGlyph>, expected: &[char]) -> Vec<DigitGlyph> {
    glyphs
        .into_iter()
        .map(|glyph| match expected.get(glyph.index) {
            Some(&digit) => glyph.with_expected(digit),
            None => glyph,
        })
        .collect()
}

/// Crop one glyph per box, preserving box order. Overlap is not checked.
pub fn segment(raster: &BinaryImage, boxes: &[CropBox]) -> Result<Vec<DigitGlyph>, PipelineError> {
    boxes
        .iter()
        .enumerate()
        .map(|(index, crop)| {
            if !crop.fits(raster.w, raster.h) {
                return Err(PipelineError::InvalidCropBox {
                    index,
                    crop: *crop,
                    width: raster.w,
                    height: raster.h,
                });
            }
            let image = raster.crop(crop.left, crop.top, crop.width(), crop.height());
            Ok(DigitGlyph::new(index, image))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{INK, PAPER};

    #[test]
    fn segment_preserves_box_order_and_size() {
        let mut raster = BinaryImage::filled(10, 6, PAPER);
        raster.set(7, 2, false);
        let boxes = [CropBox::new(5, 0, 10, 6), CropBox::new(0, 0, 5, 6)];
        let glyphs = segment(&raster, &boxes).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].index, 0);
        assert_eq!((glyphs[0].image.w, glyphs[0].image.h), (5, 6));
        assert_eq!(glyphs[0].image.get(2, 2), INK);
        assert_eq!(glyphs[1].image.paper_count(), 30);
    }

    #[test]
    fn segment_rejects_out_of_bounds_box() {
        let raster = BinaryImage::filled(8, 8, PAPER);
        let err = segment(&raster, &[CropBox::new(0, 0, 4, 4), CropBox::new(4, 4, 9, 8)])
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidCropBox { index: 1, .. }));
    }

    #[test]
    fn crop_box_round_trips_through_json_array() {
        let parsed: CropBox = serde_json::from_str("[190, 250, 280, 420]").unwrap();
        assert_eq!(parsed, CropBox::keypad_defaults()[0]);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "[190,250,280,420]");
    }

    #[test]
    fn central_region_matches_quarter_fifth_split() {
        let b = CropBox::central_region(1000, 800);
        assert_eq!(b, CropBox::new(200, 200, 750, 600));
    }

    #[test]
    fn label_glyphs_pairs_digits_by_glyph_index() {
        let glyphs: Vec<DigitGlyph> = (0..3)
            .map(|i| DigitGlyph::new(i, BinaryImage::filled(2, 2, PAPER)))
            .collect();
        let labelled = label_glyphs(glyphs, &['8', '0']);
        let labels: Vec<Option<char>> = labelled.iter().map(|g| g.expected).collect();
        assert_eq!(labels, vec![Some('8'), Some('0'), None]);
    }
}
