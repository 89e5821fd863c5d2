//! # Image Processing and Steganography
//!
//! - [`pixels`]: image files to RGBA sample buffers and back
//! - [`steganography`]: hiding and recovering UTF-8 text in images

pub mod pixels;
pub mod steganography;

pub use pixels::{ImageCodec, OutputFormat, PixelBuffer, PixelCodec, PixelError};
pub use steganography::{
    embed_text, embed_text_bytes, extract_text, extract_text_bytes, to_data_url, Extraction,
    NotFoundReason,
};
