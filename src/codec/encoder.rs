use std::iter;

use crate::codec::error::CodecError;
use crate::codec::layout::{bit_at, required_samples, with_lsb, TERMINATOR};

/// Embed `message` into the LSBs of `buffer`, in place.
///
/// The message is followed by a [`TERMINATOR`] byte. Sample `i` receives bit
/// `i % 8` of payload byte `i / 8`; only samples below
/// `(message.len() + 1) * 8` are modified, and only in their lowest bit.
///
/// # Errors
/// - [`CodecError::CapacityExceeded`] if the payload needs more samples than
///   `buffer` has. The buffer is left untouched in that case.
///
/// # Example
/// ```
/// use lsb_stego::codec::{decode, encode};
///
/// let mut samples = vec![0xFF; 64];
/// encode(&mut samples, b"A")?;
/// assert_eq!(&samples[..8], &[0xFF, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFF, 0xFE]);
/// assert_eq!(decode(&samples).into_bytes(), b"A");
/// # Ok::<(), lsb_stego::codec::CodecError>(())
/// ```
pub fn encode(buffer: &mut [u8], message: &[u8]) -> Result<(), CodecError> {
    let required = required_samples(message.len());
    if required > buffer.len() {
        return Err(CodecError::CapacityExceeded {
            required,
            available: buffer.len(),
        });
    }

    let payload: Vec<u8> = message
        .iter()
        .copied()
        .chain(iter::once(TERMINATOR))
        .collect();

    for (index, sample) in buffer[..required].iter_mut().enumerate() {
        *sample = with_lsb(*sample, bit_at(&payload, index));
    }

    Ok(())
}

/// Same as [`encode`], but leaves `buffer` alone and returns a modified copy.
pub fn encode_to_vec(buffer: &[u8], message: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut samples = buffer.to_vec();
    encode(&mut samples, message)?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_byte_into_saturated_buffer() {
        let mut buffer = vec![0xFF; 64];
        encode(&mut buffer, &[0x41]).unwrap();

        assert_eq!(
            &buffer[..8],
            &[0xFF, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFF, 0xFE]
        );
        assert!(buffer[8..16].iter().all(|&s| s == 0xFE));
        assert!(buffer[16..].iter().all(|&s| s == 0xFF));
    }

    #[test]
    fn test_encode_only_touches_lsb() {
        let original: Vec<u8> = (0..=255u8).collect();
        let mut buffer = original.clone();
        encode(&mut buffer, b"hidden text").unwrap();

        for (before, after) in original.iter().zip(&buffer) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
        assert_eq!(&buffer[96..], &original[96..]);
    }

    #[test]
    fn test_encode_rejects_oversized_message_without_writing() {
        let mut buffer = vec![0xAB; 8];
        let err = encode(&mut buffer, &[0x01, 0x02]).unwrap_err();

        assert_eq!(
            err,
            CodecError::CapacityExceeded {
                required: 24,
                available: 8
            }
        );
        assert!(buffer.iter().all(|&s| s == 0xAB));
    }

    #[test]
    fn test_encode_exact_fit() {
        let mut buffer = vec![0u8; 24];
        assert!(encode(&mut buffer, b"hi").is_ok());
        assert!(encode(&mut buffer, b"hi!").is_err());
    }

    #[test]
    fn test_encode_empty_message_writes_terminator() {
        let mut buffer = vec![0x01; 8];
        encode(&mut buffer, &[]).unwrap();
        assert_eq!(buffer, vec![0x00; 8]);
    }

    #[test]
    fn test_encode_to_vec_leaves_input() {
        let buffer = vec![0xFF; 16];
        let encoded = encode_to_vec(&buffer, &[]).unwrap();

        assert_eq!(buffer, vec![0xFF; 16]);
        assert_eq!(&encoded[..8], &[0xFE; 8]);
        assert_eq!(&encoded[8..], &[0xFF; 8]);
    }
}
