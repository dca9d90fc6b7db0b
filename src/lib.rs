pub use decode::{to_hex_text, DecodeError, Decoded};
pub use encode::EncodeError;

pub mod decode;
pub mod encode;
pub mod rainbow;


use image::ImageFormat;
use std::path::Path;

/// Alpha value of every encoded pixel.
pub const ENCODED_ALPHA: u8 = u8::MAX;
/// Green and blue value of every encoded pixel.
pub const ENCODED_FILL: u8 = 0;

/// Index of the payload channel within an RGBA pixel.
pub(crate) const RED: usize = 0;

/// The descriptor of a raster carrying one payload byte per pixel.
///
/// This value is derived from the payload length during encoding or read from the image
/// dimensions during decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
}

impl Raster {
    /// Returns the square raster used to encode a payload of `len` bytes.
    ///
    /// The side length is the integer square root of `len`, so only the first `side * side`
    /// bytes of the payload fit and the remaining ones are dropped.
    pub fn for_payload(len: usize) -> Result<Self, EncodeError> {
        let side = len.isqrt();

        if side == 0 {
            return Err(EncodeError::InvalidDimension);
        }

        let side = u32::try_from(side).map_err(|_| EncodeError::InvalidDimension)?;

        Ok(Self {
            width: side,
            height: side,
        })
    }

    /// Returns the number of pixels of the raster, which is also the number of bytes it carries.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Column-major pixel coordinates: every row of a column before advancing to the next column.
    pub(crate) fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }
}

/// Picks the container an encoded raster is stored in.
///
/// Only lossless containers keep the channel values bit-exact. Paths without a known
/// image extension are stored as BMP; known lossy formats yield `None`.
pub fn storage_format<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Bmp) | Err(_) => Some(ImageFormat::Bmp),
        Ok(ImageFormat::Png) => Some(ImageFormat::Png),
        Ok(_) => None,
    }
}
