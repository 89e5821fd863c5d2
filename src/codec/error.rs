use thiserror::Error;

/// Errors produced by the LSB codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Message plus terminator needs more samples than the buffer holds.
    #[error("message too large for this image: need {required} samples but only {available} available")]
    CapacityExceeded { required: usize, available: usize },

    /// The buffer ran out before a terminator byte was read.
    #[error("no embedded message detected ({decoded} bytes read without a terminator)")]
    NoTerminatorFound { decoded: usize },
}
