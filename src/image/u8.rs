/// Borrowed 8-bit grayscale raster. Read-only for the lifetime of a sweep.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Intensity histogram over all 256 levels.
    pub fn histogram(&self) -> [u64; 256] {
        let mut hist = [0u64; 256];
        for y in 0..self.h {
            for &px in crate::image::traits::ImageView::row(self, y) {
                hist[px as usize] += 1;
            }
        }
        hist
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
