//! # Pixel Codec
//!
//! Turns image files into flat RGBA sample buffers and back. This is the only
//! place that knows about image formats; the LSB codec sees nothing but
//! `&[u8]`.
//!
//! Output must go through a lossless format. A JPEG round trip rewrites the
//! low bits of nearly every sample and would erase the embedded message.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use clap::ValueEnum;
use image::{ImageFormat, RgbaImage};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Channels per pixel in a [`PixelBuffer`] (red, green, blue, alpha).
pub const CHANNELS: usize = 4;

#[derive(Debug, Error)]
pub enum PixelError {
    #[error("failed to read or write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("image file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("{len} samples do not match a {width}x{height} RGBA image")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    #[error("{0} is lossy and would destroy the embedded bits")]
    LossyFormat(OutputFormat),
}

/// Image formats the encoder can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
    Tiff,
    Jpeg,
}

impl OutputFormat {
    pub fn is_lossless(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Bmp => "image/bmp",
            OutputFormat::Tiff => "image/tiff",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Raw RGBA8 pixel data of one image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps `samples` as a `width` x `height` RGBA image.
    ///
    /// # Errors
    /// - [`PixelError::DimensionMismatch`] unless `samples.len() == width * height * 4`
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, PixelError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS));

        if expected != Some(samples.len()) {
            return Err(PixelError::DimensionMismatch {
                width,
                height,
                len: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Loads and decodes an image file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PixelError> {
        let bytes = fs::read(path)?;
        ImageCodec::default().decode_image_to_buffer(&bytes)
    }

    /// Encodes the buffer as `format` and writes it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<(), PixelError> {
        let bytes = ImageCodec::new(format)?.encode_buffer_to_image(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

/// Conversion between encoded image files and [`PixelBuffer`]s.
pub trait PixelCodec {
    fn decode_image_to_buffer(&self, image_bytes: &[u8]) -> Result<PixelBuffer, PixelError>;

    fn encode_buffer_to_image(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, PixelError>;
}

/// [`PixelCodec`] backed by the `image` crate.
///
/// Decoding accepts any format the crate can guess from the content; encoding
/// always writes `format`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec {
    format: OutputFormat,
}

impl ImageCodec {
    /// # Errors
    /// - [`PixelError::LossyFormat`] for formats that do not preserve every sample
    pub fn new(format: OutputFormat) -> Result<Self, PixelError> {
        if !format.is_lossless() {
            return Err(PixelError::LossyFormat(format));
        }
        Ok(Self { format })
    }
}

impl PixelCodec for ImageCodec {
    fn decode_image_to_buffer(&self, image_bytes: &[u8]) -> Result<PixelBuffer, PixelError> {
        let img = image::load_from_memory(image_bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        debug!("Decoded {}x{} image ({} bytes)", width, height, image_bytes.len());

        PixelBuffer::new(width, height, img.into_raw())
    }

    fn encode_buffer_to_image(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, PixelError> {
        let img = RgbaImage::from_raw(pixels.width, pixels.height, pixels.samples.clone())
            .ok_or(PixelError::DimensionMismatch {
                width: pixels.width,
                height: pixels.height,
                len: pixels.samples.len(),
            })?;

        let mut output_bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut output_bytes), self.format.image_format())?;
        debug!(
            "Encoded {}x{} image as {} ({} bytes)",
            pixels.width,
            pixels.height,
            self.format,
            output_bytes.len()
        );

        Ok(output_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let samples = (0..width * height * CHANNELS as u32)
            .map(|i| (i % 251) as u8)
            .collect();
        PixelBuffer::new(width, height, samples).unwrap()
    }

    #[test]
    fn test_new_checks_dimensions() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            PixelBuffer::new(2, 2, vec![0; 15]),
            Err(PixelError::DimensionMismatch { len: 15, .. })
        ));
    }

    #[test]
    fn test_lossy_format_rejected() {
        assert!(matches!(
            ImageCodec::new(OutputFormat::Jpeg),
            Err(PixelError::LossyFormat(OutputFormat::Jpeg))
        ));
    }

    #[test]
    fn test_png_preserves_every_sample() {
        let pixels = gradient(7, 5);
        let codec = ImageCodec::new(OutputFormat::Png).unwrap();

        let bytes = codec.encode_buffer_to_image(&pixels).unwrap();
        let decoded = codec.decode_image_to_buffer(&bytes).unwrap();

        assert_eq!(decoded, pixels);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = ImageCodec::default().decode_image_to_buffer(b"not an image");
        assert!(matches!(result, Err(PixelError::Image(_))));
    }
}
