//! compression/mod.rs
//! Codec contract and the LZO1X-1 back-end.
//!
//! Notes:
//! - The codec is a capacity-bounded, status-reporting black box: callers own every buffer.
//! - `OutputBufferTooSmall` is reported distinctly so the headerless decoder can escalate.
//! - The back-end needs a one-time process-wide initialization (`init`) before first use.

pub mod constants;
pub mod types;
pub mod init;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use init::init;
pub use codecs::Lzo1x;
