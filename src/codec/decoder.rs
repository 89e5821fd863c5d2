use crate::codec::error::CodecError;
use crate::codec::layout::{BITS_PER_BYTE, TERMINATOR};

/// Outcome of scanning a buffer for an embedded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// A terminator was found; holds every byte before it.
    Message(Vec<u8>),
    /// The buffer was exhausted first; holds the complete bytes read.
    ///
    /// Trailing samples that do not make up a whole byte are dropped.
    Unterminated(Vec<u8>),
}

impl Decoded {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Decoded::Message(_))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Decoded::Message(bytes) | Decoded::Unterminated(bytes) => bytes,
        }
    }

    /// The decoded bytes, whether or not a terminator was seen.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Message(bytes) | Decoded::Unterminated(bytes) => bytes,
        }
    }

    /// The decoded bytes, but only if the message was properly terminated.
    pub fn into_message(self) -> Result<Vec<u8>, CodecError> {
        match self {
            Decoded::Message(bytes) => Ok(bytes),
            Decoded::Unterminated(bytes) => Err(CodecError::NoTerminatorFound {
                decoded: bytes.len(),
            }),
        }
    }
}

/// Read an LSB-embedded message out of `buffer`.
///
/// Samples are consumed in order, their LSBs packed least significant bit
/// first into bytes. Reading stops at the first zero byte, which is consumed
/// but not returned. Any buffer is valid input; one that was never encoded
/// simply yields garbage or [`Decoded::Unterminated`].
pub fn decode(buffer: &[u8]) -> Decoded {
    let mut message = Vec::new();
    let mut byte = 0u8;
    let mut bit_count = 0usize;

    for &sample in buffer {
        byte |= (sample & 1) << bit_count;
        bit_count += 1;

        if bit_count < BITS_PER_BYTE {
            continue;
        }

        if byte == TERMINATOR {
            return Decoded::Message(message);
        }

        message.push(byte);
        byte = 0;
        bit_count = 0;
    }

    Decoded::Unterminated(message)
}
