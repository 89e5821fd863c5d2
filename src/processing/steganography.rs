//! # Text Steganography on Images
//!
//! Glue between UTF-8 text, image files and the LSB codec.
//!
//! ### Embedding
//! 1. Decode the image into RGBA samples
//! 2. Write the UTF-8 bytes of the text, plus a `0x00` terminator, into the
//!    LSBs of consecutive samples (alpha included)
//! 3. Re-encode the samples with a lossless format
//!
//! ### Extraction
//! 1. Decode the image into RGBA samples
//! 2. Read LSBs until a zero byte turns up
//! 3. Accept the result only if it was terminated and is valid UTF-8
//!
//! ### Capacity
//! An image holds `(width * height * 4) / 8 - 1` bytes of text.
//! Example: an 800x600 image can store ~240 KB.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use log::{debug, info, warn};
use serde::Serialize;

use crate::codec::{self, Decoded};
use crate::processing::pixels::{ImageCodec, OutputFormat, PixelBuffer, PixelCodec};

/// Why no message could be read from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// No terminator byte before the end of the samples.
    Unterminated,
    /// Terminated, but the bytes are not UTF-8.
    InvalidUtf8,
}

/// Result of looking for text in an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound(NotFoundReason),
}

/// Hide `text` in the samples of `pixels`.
///
/// # Arguments
/// - `pixels`: RGBA samples of the cover image, modified in place
/// - `text`: UTF-8 text to embed
///
/// # Errors
/// - `text` contains a NUL character, which would cut the message short on extraction
/// - The image is too small for the text
pub fn embed_text(pixels: &mut PixelBuffer, text: &str) -> Result<()> {
    if text.contains('\0') {
        bail!("Message contains a NUL character and cannot be embedded");
    }

    let message = text.as_bytes();
    debug!(
        "Embedding {} bytes into {} samples (capacity {} bytes)",
        message.len(),
        pixels.samples().len(),
        codec::capacity(pixels.samples().len())
    );

    codec::encode(pixels.samples_mut(), message)?;
    Ok(())
}

/// Read text hidden by [`embed_text`].
///
/// # Returns
/// - `Extraction::Found(text)`: a terminated, valid UTF-8 message
/// - `Extraction::NotFound(reason)`: no terminator, or the bytes are not UTF-8
pub fn extract_text(pixels: &PixelBuffer) -> Extraction {
    match codec::decode(pixels.samples()) {
        Decoded::Message(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Extraction::Found(text),
            Err(e) => {
                warn!("Embedded message is not valid UTF-8: {}", e);
                Extraction::NotFound(NotFoundReason::InvalidUtf8)
            }
        },
        Decoded::Unterminated(bytes) => {
            warn!(
                "No terminator found after reading {} bytes from {} samples",
                bytes.len(),
                pixels.samples().len()
            );
            Extraction::NotFound(NotFoundReason::Unterminated)
        }
    }
}

/// Embed `text` into an encoded image and return the new image, encoded by `pixel_codec`.
///
/// # Arguments
/// - `pixel_codec`: decodes the cover and encodes the result
/// - `image_bytes`: raw bytes of the cover image
/// - `text`: UTF-8 text to embed
///
/// # Errors
/// - The cover cannot be decoded or the result cannot be encoded
/// - Anything [`embed_text`] rejects
pub fn embed_text_bytes_with<C: PixelCodec>(
    pixel_codec: &C,
    image_bytes: &[u8],
    text: &str,
) -> Result<Vec<u8>> {
    let mut pixels = pixel_codec
        .decode_image_to_buffer(image_bytes)
        .context("Failed to load cover image")?;

    embed_text(&mut pixels, text)?;

    let output = pixel_codec
        .encode_buffer_to_image(&pixels)
        .context("Failed to encode output image")?;

    info!(
        "Embedded {} bytes of text into {}x{} image",
        text.len(),
        pixels.width(),
        pixels.height()
    );
    Ok(output)
}

/// Embed `text` into an encoded image, producing PNG bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)`: PNG image bytes with the text embedded
/// - `Err`: the image cannot be loaded, is too small, or the text contains NUL
///
/// # Example
/// ```ignore
/// let image_data = std::fs::read("input.png")?;
/// let encoded = embed_text_bytes(&image_data, "Secret message")?;
/// std::fs::write("fingerprint.png", encoded)?;
/// ```
pub fn embed_text_bytes(image_bytes: &[u8], text: &str) -> Result<Vec<u8>> {
    embed_text_bytes_with(&ImageCodec::default(), image_bytes, text)
}

/// Look for text in an encoded image.
///
/// Only a failure to decode the image itself is an error; an image without a
/// readable message gives [`Extraction::NotFound`].
///
/// # Errors
/// - `image_bytes` is not an image format the `image` crate can read
pub fn extract_text_bytes(image_bytes: &[u8]) -> Result<Extraction> {
    let pixels = ImageCodec::default()
        .decode_image_to_buffer(image_bytes)
        .context("Failed to load image")?;

    Ok(extract_text(&pixels))
}

/// Wrap encoded image bytes in a `data:` URL.
///
/// # Arguments
/// - `image_bytes`: an encoded image file
/// - `format`: the format of `image_bytes`, which picks the MIME type
///
/// # Returns
/// `data:<mime>;base64,<payload>` with standard, padded base64.
pub fn to_data_url(image_bytes: &[u8], format: OutputFormat) -> String {
    format!(
        "data:{};base64,{}",
        format.mime_type(),
        general_purpose::STANDARD.encode(image_bytes)
    )
}
