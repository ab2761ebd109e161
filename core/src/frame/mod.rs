//! frame/mod.rs
//! Encode and decode pipelines around the codec.
//!
//! Responsibilities:
//! - Size and allocate codec output buffers (worst-case bound, exact header length, ladder)
//! - Prepend or strip the optional size header
//! - Validate codec results against the frame metadata
//!
//! Non-responsibilities:
//! - The compression algorithm itself
//! - File and stdio access

pub mod layout;
pub mod encode;
pub mod decode;
pub mod ladder;

pub use layout::FrameLayout;
pub use encode::FrameEncoder;
pub use decode::FrameDecoder;
pub use ladder::{GrowthLadder, SizeEstimate};

use crate::types::{DecodeError, EncodeError};

/// Compress `raw` with the default LZO1X-1 codec, prepending the size header when asked.
pub fn encode(raw: &[u8], with_header: bool) -> Result<Vec<u8>, EncodeError> {
    FrameEncoder::lzo()?.encode(raw, FrameLayout::from(with_header))
}

/// Recover the raw bytes of a frame produced by [`encode`] with the same `with_header` flag.
pub fn decode(frame: &[u8], with_header: bool) -> Result<Vec<u8>, DecodeError> {
    FrameDecoder::lzo()?.decode(frame, FrameLayout::from(with_header))
}
