//! Iterative 4-connected flood fill over paper samples.

use crate::image::BinaryImage;

pub(crate) const UNLABELED: u8 = 0;
pub(crate) const OUTSIDE: u8 = 1;
pub(crate) const HOLE: u8 = 2;

const NEIGH4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Summary of one filled component.
pub(crate) struct RegionAccumulator {
    pub size: usize,
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl RegionAccumulator {
    fn empty() -> Self {
        Self {
            size: 0,
            min_x: usize::MAX,
            min_y: usize::MAX,
            max_x: 0,
            max_y: 0,
        }
    }

    fn push(&mut self, x: usize, y: usize) {
        self.size += 1;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// Per-pixel label mask keyed by linear index, plus a reusable stack.
pub(crate) struct Filler<'a> {
    image: &'a BinaryImage,
    labels: Vec<u8>,
    stack: Vec<usize>,
    reverse: bool,
}

impl<'a> Filler<'a> {
    pub(crate) fn new(image: &'a BinaryImage, reverse: bool) -> Self {
        Self {
            image,
            labels: vec![UNLABELED; image.w * image.h],
            stack: Vec::with_capacity(64),
            reverse,
        }
    }

    #[inline]
    pub(crate) fn is_free(&self, x: usize, y: usize) -> bool {
        self.image.is_paper(x, y) && self.labels[self.image.idx(x, y)] == UNLABELED
    }

    /// Label the paper component containing `(x, y)`.
    ///
    /// A seed on ink or on an already-labeled sample is a no-op returning an
    /// empty region.
    pub(crate) fn fill(&mut self, x: usize, y: usize, label: u8) -> RegionAccumulator {
        let mut region = RegionAccumulator::empty();
        if !self.is_free(x, y) {
            return region;
        }
        let (w, h) = (self.image.w as isize, self.image.h as isize);
        self.stack.clear();
        let seed = self.image.idx(x, y);
        self.labels[seed] = label;
        self.stack.push(seed);

        while let Some(idx) = self.stack.pop() {
            let cx = idx % self.image.w;
            let cy = idx / self.image.w;
            region.push(cx, cy);
            for k in 0..NEIGH4.len() {
                let (dx, dy) = if self.reverse {
                    NEIGH4[NEIGH4.len() - 1 - k]
                } else {
                    NEIGH4[k]
                };
                let nx = cx as isize + dx;
                let ny = cy as isize + dy;
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if self.is_free(nx, ny) {
                    let nidx = self.image.idx(nx, ny);
                    self.labels[nidx] = label;
                    self.stack.push(nidx);
                }
            }
        }
        region
    }

    #[cfg(test)]
    pub(crate) fn label_at(&self, x: usize, y: usize) -> u8 {
        self.labels[self.image.idx(x, y)]
    }
}
