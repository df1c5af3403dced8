//! Owned two-level raster.
//!
//! Every sample is exactly `INK` (stroke, at or below the threshold) or
//! `PAPER` (above the threshold). Holes are enclosed `PAPER` regions.

/// Stroke level.
pub const INK: u8 = 0;
/// Background level.
pub const PAPER: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    pub w: usize,
    pub h: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Construct a raster of size `w × h` filled with `level`.
    pub fn filled(w: usize, h: usize, level: u8) -> Self {
        debug_assert!(level == INK || level == PAPER);
        Self {
            w,
            h,
            data: vec![level; w * h],
        }
    }

    /// Build from per-pixel booleans (`true` = paper), row-major.
    pub fn from_paper_mask(w: usize, h: usize, paper: impl IntoIterator<Item = bool>) -> Self {
        let data: Vec<u8> = paper
            .into_iter()
            .take(w * h)
            .map(|p| if p { PAPER } else { INK })
            .collect();
        assert_eq!(data.len(), w * h, "mask shorter than {w}x{h}");
        Self { w, h, data }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn is_paper(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == PAPER
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, paper: bool) {
        let i = self.idx(x, y);
        self.data[i] = if paper { PAPER } else { INK };
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn paper_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == PAPER).count()
    }

    /// Copy the sub-raster `[x0, x0 + w) × [y0, y0 + h)`. Caller guarantees bounds.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in y0..y0 + h {
            let start = self.idx(x0, y);
            data.extend_from_slice(&self.data[start..start + w]);
        }
        Self { w, h, data }
    }
}

impl crate::image::traits::ImageView for BinaryImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
