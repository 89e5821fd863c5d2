//! # lsb-stego
//!
//! Hides text in the least significant bits of image pixel samples.
//!
//! - [`codec`]: the LSB encoder/decoder over raw sample buffers
//! - [`processing`]: image file handling and text embedding
//! - [`common`]: configuration and reporting

pub mod codec;
pub mod common;
pub mod processing;

pub use codec::{decode, encode, CodecError, Decoded};
pub use processing::{embed_text_bytes, extract_text_bytes, Extraction, PixelBuffer};
