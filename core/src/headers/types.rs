//! headers/types.rs
//! Size header type, sanity bound and header errors.
use thiserror::Error;

use crate::constants::{MAX_DECLARED_LEN, SIZE_HEADER_LEN};

/// Original (decompressed) length carried in front of a headered frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct SizeHeader {
    pub original_len: u64,
}

impl SizeHeader {
    pub const LEN: usize = SIZE_HEADER_LEN;

    pub fn new(original_len: usize) -> Self {
        Self { original_len: original_len as u64 }
    }

    pub fn is_empty(&self) -> bool {
        self.original_len == 0
    }

    /// Check the declared length against `max` and convert it to a buffer length.
    ///
    /// Zero is not rejected here: whether a zero length is acceptable depends on
    /// the payload, which only the decoder can judge.
    pub fn validate(&self, max: u64) -> Result<usize, HeaderError> {
        let max = max.min(MAX_DECLARED_LEN);
        if self.original_len > max {
            return Err(HeaderError::DeclaredLenTooLarge { declared: self.original_len, max });
        }
        usize::try_from(self.original_len)
            .map_err(|_| HeaderError::DeclaredLenTooLarge { declared: self.original_len, max })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Frame shorter than the header itself.
    #[error("frame too short for size header: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Declared length is zero but the payload is not the codec's empty stream.
    #[error("declared length is zero but payload holds {payload_len} compressed bytes")]
    DeclaredLenZero { payload_len: usize },

    /// Declared length above the sanity bound.
    #[error("declared length {declared} exceeds bound {max}")]
    DeclaredLenTooLarge { declared: u64, max: u64 },
}
