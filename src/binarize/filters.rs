//! Grayscale pre-filters applied ahead of thresholding.
//!
//! Border samples clamp to the image extents (replicate).

use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order), centred on the middle tap.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian with σ = 1 (blur radius of one sample).
pub const GAUSSIAN_SIGMA1: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.054_489, 0.244_201, 0.402_620, 0.244_201, 0.054_489]);

/// Separable blur; output is rounded back to 8 bits.
pub fn gaussian_blur(gray: ImageU8<'_>, filter: &dyn SeparableFilter) -> GrayImageU8 {
    let src = ImageF32::from_u8(gray);
    if src.w == 0 || src.h == 0 {
        return src.to_u8();
    }
    let taps = filter.taps();
    let radius = (taps.len() / 2) as isize;

    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let row = src.row(y);
        let out = horiz.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, src.w);
                acc += tap * row[sx];
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        for x in 0..src.w {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, src.h);
                acc += tap * horiz.get(x, sy);
            }
            out.set(x, y, acc);
        }
    }
    out.to_u8()
}

/// 3×3 median filter.
pub fn median3(gray: ImageU8<'_>) -> GrayImageU8 {
    let (w, h) = (gray.w, gray.h);
    let mut data = Vec::with_capacity(w * h);
    let mut window = [0u8; 9];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let mut n = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    window[n] = gray.get_clamped(x + dx, y + dy);
                    n += 1;
                }
            }
            window.sort_unstable();
            data.push(window[4]);
        }
    }
    GrayImageU8::new(w, h, data)
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
