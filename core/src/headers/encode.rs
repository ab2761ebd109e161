//! headers/encode.rs
//! Size header encoding.
use byteorder::{ByteOrder, LittleEndian};

use crate::headers::types::SizeHeader;

/// Serialize a `SizeHeader` into its 8-byte little-endian form.
#[inline]
pub fn encode_size_header_le(h: &SizeHeader) -> [u8; SizeHeader::LEN] {
    let mut out = [0u8; SizeHeader::LEN];
    LittleEndian::write_u64(&mut out, h.original_len);
    out
}

