//! Bit layout shared by the encoder and decoder.
//!
//! This is the wire format: any two implementations have to agree on it bit
//! for bit to interoperate.

/// Byte appended after the message to mark its end.
pub const TERMINATOR: u8 = 0x00;

/// Samples consumed per payload byte, one bit each.
pub const BITS_PER_BYTE: usize = 8;

/// Mask that clears the least significant bit of a sample.
pub const LSB_CLEAR: u8 = 0xFE;

/// Returns bit `index` of the flattened `payload`, least significant bit first.
///
/// # Panics
/// If `index / 8` is out of bounds for `payload`.
#[inline]
pub fn bit_at(payload: &[u8], index: usize) -> u8 {
    (payload[index / BITS_PER_BYTE] >> (index % BITS_PER_BYTE)) & 1
}

/// Stores `bit` in the LSB of `sample`, keeping the other seven bits.
#[inline]
pub fn with_lsb(sample: u8, bit: u8) -> u8 {
    (sample & LSB_CLEAR) | (bit & 1)
}

/// Number of samples needed to hold a message of `message_len` bytes,
/// terminator included.
pub fn required_samples(message_len: usize) -> usize {
    message_len
        .saturating_add(1)
        .saturating_mul(BITS_PER_BYTE)
}

/// Largest message, in bytes, that fits in a buffer of `buffer_len` samples.
///
/// A buffer shorter than one byte's worth of samples cannot even hold the
/// terminator and has a capacity of zero.
pub fn capacity(buffer_len: usize) -> usize {
    (buffer_len / BITS_PER_BYTE).saturating_sub(1)
}
