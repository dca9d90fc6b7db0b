use crate::{storage_format, Raster, ENCODED_ALPHA, ENCODED_FILL};
use image::{ImageError, Rgba, RgbaImage};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that may occur during raster encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// An input or output path is empty or names a container that can not store the raster
    /// losslessly.
    #[error("Argument exception: {0}")]
    InvalidArgument(String),
    /// The payload is too short to fill even a single pixel.
    #[error("File dimensions must be greater than zero.")]
    InvalidDimension,
    /// The payload file could not be read.
    #[error("IO exception while reading {}: {source}", path.display())]
    StorageRead { path: PathBuf, source: io::Error },
    /// The encoded image could not be saved.
    #[error("IO exception while saving {}: {source}", path.display())]
    StorageWrite { path: PathBuf, source: ImageError },
}

impl Raster {
    /// Encodes the bytes of the file at `input` into an image saved at `output`.
    pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
    ) -> Result<Self, EncodeError> {
        let (input, output) = (input.as_ref(), output.as_ref());

        if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
            return Err(EncodeError::InvalidArgument(
                "File and path arguments cannot be null or empty.".into(),
            ));
        }

        let bytes = match fs::read(input) {
            Ok(bytes) => bytes,
            Err(source) => {
                return Err(EncodeError::StorageRead {
                    path: input.to_path_buf(),
                    source,
                })
            }
        };

        Self::encode_bytes_to_file(&bytes, output)
    }

    /// Encodes a byte slice into an image saved at `path`.
    ///
    /// The container is picked by [`storage_format`]; lossy containers are rejected before
    /// anything is encoded.
    pub fn encode_bytes_to_file<P: AsRef<Path>>(
        bytes: &[u8],
        path: P,
    ) -> Result<Self, EncodeError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(EncodeError::InvalidArgument(
                "Output path cannot be null or empty.".into(),
            ));
        }

        let format = match storage_format(path) {
            Some(format) => format,
            None => {
                return Err(EncodeError::InvalidArgument(format!(
                    "{} does not name a lossless image container, use .bmp or .png.",
                    path.display()
                )))
            }
        };

        let (raster, image) = Self::encode_alloc(bytes)?;

        image
            .save_with_format(path, format)
            .map_err(|source| EncodeError::StorageWrite {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(raster)
    }

    /// Encodes a byte slice into a newly allocated square image.
    ///
    /// Pixels are filled column by column, each carrying one byte in its red channel.
    #[inline]
    pub fn encode_alloc(bytes: &[u8]) -> Result<(Self, RgbaImage), EncodeError> {
        let raster = Self::for_payload(bytes.len())?;
        let mut image = RgbaImage::new(raster.width, raster.height);

        encode(&raster, bytes, &mut image);

        Ok((raster, image))
    }
}

fn encode(raster: &Raster, bytes: &[u8], image: &mut RgbaImage) {
    // `bytes` holds at least `pixel_count` values, the surplus past the square is never read.
    for ((x, y), &byte) in raster.coordinates().zip(bytes) {
        image.put_pixel(x, y, Rgba([byte, ENCODED_FILL, ENCODED_FILL, ENCODED_ALPHA]));
    }
}
