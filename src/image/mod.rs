//! Raster types shared by the recognition pipeline.
//!
//! - `ImageU8`: borrowed 8-bit grayscale view with stride (the decoded input).
//! - `ImageF32`: owned float buffer used by the blur pre-filter.
//! - `BinaryImage`: owned two-level raster produced by binarization.

pub mod binary;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::binary::{BinaryImage, INK, PAPER};
pub use self::f32::ImageF32;
pub use self::io::GrayImageU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
