use crate::{Raster, RED};
use image::{ImageError, ImageReader, RgbaImage};
use std::{
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that may occur during raster decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The image path or the save location is empty.
    #[error("Argument error: {0}")]
    InvalidArgument(String),
    /// The image to decode does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// The image exists but could not be opened or decoded.
    #[error("I/O error while loading {}: {source}", path.display())]
    StorageRead { path: PathBuf, source: ImageError },
    /// The hex text could not be written.
    #[error("I/O error while saving {}: {source}", path.display())]
    StorageWrite { path: PathBuf, source: io::Error },
    /// Anything else that went wrong.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// The result of decoding an image: its descriptor, the red channel values and their hex text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub raster: Raster,
    pub bytes: Vec<u8>,
    pub hex: String,
}

impl Raster {
    /// Decodes the image at `input` and writes the hex text of its red channel to `output`.
    ///
    /// Any existing content at `output` is overwritten.
    pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
    ) -> Result<Decoded, DecodeError> {
        let (input, output) = (input.as_ref(), output.as_ref());

        if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
            return Err(DecodeError::InvalidArgument(
                "File path or save location cannot be null or empty.".into(),
            ));
        }

        let image = Self::load(input)?;
        let (raster, bytes) = Self::decode_alloc(&image)?;
        let hex = to_hex_text(&bytes);

        if let Err(source) = fs::write(output, &hex) {
            return Err(DecodeError::StorageWrite {
                path: output.to_path_buf(),
                source,
            });
        }

        Ok(Decoded { raster, bytes, hex })
    }

    /// Loads an image in any supported lossless container as 8 bit RGBA.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RgbaImage, DecodeError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DecodeError::InputNotFound(path.to_path_buf()));
        }

        let storage_error = |source| DecodeError::StorageRead {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(|err| storage_error(ImageError::IoError(err)))?
            .with_guessed_format()
            .map_err(|err| storage_error(ImageError::IoError(err)))?
            .decode()
            .map_err(storage_error)?;

        Ok(image.into_rgba8())
    }

    /// Decodes the red channel of an image into a newly allocated `Vec`.
    ///
    /// The image is scanned column by column, matching the order used by the encoder. The
    /// result always holds `width * height` bytes, pixels the encoder never wrote included.
    /// Non-square images are accepted even though the encoder only produces square ones.
    #[inline]
    pub fn decode_alloc(image: &RgbaImage) -> Result<(Self, Vec<u8>), DecodeError> {
        let (width, height) = image.dimensions();
        let raster = Raster { width, height };

        let mut decoded = Vec::new();
        decoded.try_reserve_exact(raster.pixel_count()).map_err(|_| {
            DecodeError::Unexpected(format!("{width}x{height} image does not fit in memory"))
        })?;

        decode(&raster, image, &mut decoded);

        Ok((raster, decoded))
    }
}

fn decode(raster: &Raster, image: &RgbaImage, decoded: &mut Vec<u8>) {
    decoded.extend(
        raster
            .coordinates()
            .map(|(x, y)| image.get_pixel(x, y).0[RED]),
    );
}

/// Renders bytes as two uppercase hex digits each, separated by single spaces.
pub fn to_hex_text(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 3);

    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            hex.push(' ');
        }
        // Writing into a `String` can not fail.
        let _ = write!(hex, "{byte:02X}");
    }

    hex
}
