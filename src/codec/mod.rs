//! # LSB Codec
//!
//! Embeds a byte message into the least significant bits of a flat pixel
//! sample buffer and reads it back.
//!
//! ## Bit Layout
//!
//! The message is followed by a single `0x00` terminator. Bit `i` of that
//! sequence (bytes flattened least-significant bit first) goes into the LSB of
//! sample `i`. Nothing else in the buffer is touched.
//!
//! ## Modules
//!
//! - [`layout`]: the shared bit order, terminator and capacity arithmetic
//! - [`encoder`]: writes a message into a buffer
//! - [`decoder`]: reads a message back out of a buffer
//! - [`error`]: codec error type

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod layout;

pub use decoder::{decode, Decoded};
pub use encoder::{encode, encode_to_vec};
pub use error::CodecError;
pub use layout::{capacity, required_samples, TERMINATOR};
