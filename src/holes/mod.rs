//! Hole counting on binary glyphs.
//!
//! A hole is a maximal 4-connected set of paper samples that cannot be
//! reached from the glyph border without crossing ink. Counting proceeds in
//! two phases over a per-pixel label mask:
//!
//! 1. Outside marking: paper reachable from the border seed(s) is labeled
//!    `OUTSIDE`. The two variants differ only in how the border is seeded.
//! 2. Hole search: every remaining unlabeled paper sample starts a new
//!    component, which is filled and labeled `HOLE` so no sample is counted
//!    twice. Components smaller than the minimum size are labeled but not
//!    counted.
//!
//! Both phases use an explicit stack; recursion depth never grows with the
//! glyph size.

mod flood;


use crate::image::BinaryImage;
use flood::{Filler, HOLE, OUTSIDE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Border-seeding strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleVariant {
    /// Single seed at (0, 0). When that corner is ink nothing is marked
    /// outside, so border-touching paper is reported as holes.
    Standard,
    /// Seeds from every paper sample on all four edges; holes are searched
    /// over interior samples only.
    Robust,
}

impl HoleVariant {
    pub const ALL: [HoleVariant; 2] = [HoleVariant::Standard, HoleVariant::Robust];

    pub fn label(self) -> &'static str {
        match self {
            HoleVariant::Standard => "Standard",
            HoleVariant::Robust => "Robust",
        }
    }
}

impl fmt::Display for HoleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order in which candidate seeds and neighbours are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    #[default]
    Forward,
    Reverse,
}

/// One enclosed paper component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hole {
    pub size: usize,
    /// Inclusive bounds `[min_x, min_y, max_x, max_y]` in glyph coordinates.
    pub bbox: [usize; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct HoleCounter {
    pub variant: HoleVariant,
    pub order: ScanOrder,
}

impl HoleCounter {
    pub fn new(variant: HoleVariant) -> Self {
        Self {
            variant,
            order: ScanOrder::Forward,
        }
    }

    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// All enclosed components, unfiltered, in discovery order.
    pub fn find_holes(&self, glyph: &BinaryImage) -> Vec<Hole> {
        let (w, h) = (glyph.w, glyph.h);
        if w == 0 || h == 0 {
            return Vec::new();
        }
        let reverse = self.order == ScanOrder::Reverse;
        let mut filler = Filler::new(glyph, reverse);

        let (xs, ys) = match self.variant {
            HoleVariant::Standard => {
                filler.fill(0, 0, OUTSIDE);
                (0..w, 0..h)
            }
            HoleVariant::Robust => {
                for (x, y) in border_samples(w, h) {
                    filler.fill(x, y, OUTSIDE);
                }
                (1..w.saturating_sub(1), 1..h.saturating_sub(1))
            }
        };

        let mut seeds: Vec<(usize, usize)> = ys
            .flat_map(|y| xs.clone().map(move |x| (x, y)))
            .collect();
        if reverse {
            seeds.reverse();
        }

        let mut holes = Vec::new();
        for (x, y) in seeds {
            if !filler.is_free(x, y) {
                continue;
            }
            let region = filler.fill(x, y, HOLE);
            holes.push(Hole {
                size: region.size,
                bbox: [region.min_x, region.min_y, region.max_x, region.max_y],
            });
        }
        holes
    }

    /// Number of holes with at least `min_hole_size` samples.
    pub fn count(&self, glyph: &BinaryImage, min_hole_size: usize) -> usize {
        self.find_holes(glyph)
            .iter()
            .filter(|hole| hole.size >= min_hole_size)
            .count()
    }
}

/// Count holes of at least `min_hole_size` samples using `variant`.
pub fn count_holes(glyph: &BinaryImage, variant: HoleVariant, min_hole_size: usize) -> usize {
    HoleCounter::new(variant).count(glyph, min_hole_size)
}

fn border_samples(w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
    let left_right = (0..h).flat_map(move |y| [(0, y), (w - 1, y)]);
    let top_bottom = (0..w).flat_map(move |x| [(x, 0), (x, h - 1)]);
    left_right.chain(top_bottom)
}
