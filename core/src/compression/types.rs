//! compression/types.rs
//! Codec status, the `Codec` trait and codec-level errors.
use std::fmt;

use thiserror::Error;

use crate::compression::constants::max_compressed_len;

/// Outcome of one compress or decompress call.
/// Produced fresh per call; never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecStatus {
    /// Call succeeded; exact number of bytes written into the output buffer.
    Ok(usize),
    /// Output buffer capacity was insufficient. The only retryable status.
    OutputBufferTooSmall,
    /// Corrupt stream, truncated input or any other codec fault, with the codec's own code.
    OtherFailure(i32),
}

impl fmt::Display for CodecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecStatus::Ok(n) => write!(f, "ok ({} bytes)", n),
            CodecStatus::OutputBufferTooSmall => f.write_str("output buffer too small"),
            CodecStatus::OtherFailure(code) => write!(f, "codec status {}", code),
        }
    }
}

/// Capacity-parameterized, status-reporting codec.
///
/// Implementations write into the caller's buffer and never allocate output
/// themselves. Both calls must be deterministic.
pub trait Codec {
    /// Stable name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Compress `input` into `output`, reporting the exact byte count written.
    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus;

    /// Decompress `input` into `output`, reporting the exact byte count written.
    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus;

    /// True when `payload` is byte-identical to the stream this codec emits for empty input.
    ///
    /// Compresses an empty input; never decompresses `payload`.
    fn is_empty_stream(&mut self, payload: &[u8]) -> bool {
        let mut canonical = vec![0u8; max_compressed_len(0)];
        match self.compress(&[], &mut canonical) {
            CodecStatus::Ok(n) => payload == &canonical[..n],
            _ => false,
        }
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        (**self).compress(input, output)
    }

    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        (**self).decompress(input, output)
    }

    fn is_empty_stream(&mut self, payload: &[u8]) -> bool {
        (**self).is_empty_stream(payload)
    }
}

/// Codec setup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// One-time initialization self-check did not reproduce its sample.
    #[error("codec {codec} init failed: {msg}")]
    InitFailed { codec: &'static str, msg: String },
}
