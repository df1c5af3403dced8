//! 3×3 rank filters on binary rasters.
//!
//! Levels order as `INK < PAPER`, so `erode` is a 3×3 minimum (paper shrinks,
//! strokes grow) and `dilate` a 3×3 maximum. Borders replicate.

use crate::image::{BinaryImage, ImageView, INK, PAPER};

/// 3×3 minimum: a sample stays paper only if its whole window is paper.
pub fn erode(src: &BinaryImage) -> BinaryImage {
    rank3(src, INK)
}

/// 3×3 maximum: a sample becomes paper if any sample in its window is paper.
pub fn dilate(src: &BinaryImage) -> BinaryImage {
    rank3(src, PAPER)
}

/// Opening: `dilate(erode(src))`. Removes isolated paper specks; may close
/// holes thinner than three samples.
pub fn open(src: &BinaryImage) -> BinaryImage {
    dilate(&erode(src))
}

/// Sets each output sample to `dominant` when any window sample has that level.
fn rank3(src: &BinaryImage, dominant: u8) -> BinaryImage {
    let other = if dominant == INK { PAPER } else { INK };
    let mut out = BinaryImage::filled(src.w, src.h, other);
    for y in 0..src.h as isize {
        for x in 0..src.w as isize {
            let hit = (-1..=1).any(|dy| {
                (-1..=1).any(|dx| src.get_clamped(x + dx, y + dy) == dominant)
            });
            if hit {
                out.set(x as usize, y as usize, dominant == PAPER);
            }
        }
    }
    out
}
