//! headers/mod.rs
//! The optional 8-byte original-size header.
//!
//! Notes:
//! - Fixed width, little-endian `u64`, independent of host word size and byte order.
//! - Presence is a caller flag; nothing in the frame marks it.
//! - Encode side writes any length verbatim; decode side applies the sanity bound.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
