//! lzframe-core
//!
//! Single-shot LZO1X-1 framing: worst-case-bounded compression, an optional
//! 8-byte little-endian original-size header, and bounded buffer sizing for
//! decompression when the original size is unknown.
//! No file or stdio access.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

pub mod compression;
pub mod headers;
pub mod telemetry;

// Pipelines
pub mod frame;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Codec, CodecStatus, Lzo1x};
    pub use crate::config::FrameConfig;
    pub use crate::frame::{decode, encode, FrameDecoder, FrameEncoder, FrameLayout};
    pub use crate::types::{DecodeError, EncodeError, FailureReason};
}

pub use frame::{decode, encode};
pub use types::{DecodeError, EncodeError};
