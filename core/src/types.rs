//! types.rs
//! Error taxonomy for the encode and decode pipelines.
//!
//! - `MalformedFrame`: header missing or failing its sanity bound. Never retried.
//! - `CodecFailure`: codec reported a non-recoverable status, or the ladder ran out.
//! - `LengthMismatch`: headered decode produced a different length than declared.
//! Insufficient output space is internal to the headerless ladder and only
//! surfaces as `CodecFailure` once the last rung has failed.
use std::fmt;

use thiserror::Error;

use crate::compression::CodecError;
use crate::config::ConfigError;
use crate::headers::HeaderError;

/// Why a codec call ended a pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// Codec-supplied diagnostic code (corruption, truncation, invalid stream).
    Status(i32),
    /// Output space still insufficient at the largest capacity tried.
    OutputBufferTooSmall { capacity: usize },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "codec status {}", code),
            FailureReason::OutputBufferTooSmall { capacity } =>
                write!(f, "output buffer too small at {} bytes", capacity),
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Init(#[from] CodecError),

    #[error("codec {codec} failed to compress {input_len} bytes: {reason}")]
    CodecFailure { codec: &'static str, input_len: usize, reason: FailureReason },

    #[error("cannot allocate {requested} bytes for compressed output")]
    OutOfMemory { requested: usize },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Init(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] HeaderError),

    #[error("codec {codec} failed after {attempts} attempt(s): {reason}")]
    CodecFailure { codec: &'static str, attempts: usize, reason: FailureReason },

    #[error("length mismatch: header declared {declared} bytes, codec produced {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("cannot allocate {requested} bytes for decompressed output")]
    OutOfMemory { requested: usize },
}

impl DecodeError {
    /// Codec-side failure: a bad status, an exhausted ladder, or a length mismatch.
    pub fn is_decompression_failure(&self) -> bool {
        matches!(self, DecodeError::CodecFailure { .. } | DecodeError::LengthMismatch { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DecodeError::MalformedFrame(_))
    }
}
