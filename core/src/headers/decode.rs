//! headers/decode.rs
//! Size header decoding.
//!
//! Only the byte layout is checked here. The declared-length sanity bound is
//! applied by `SizeHeader::validate`, which the decoder calls with its config.
use byteorder::{ByteOrder, LittleEndian};

use crate::headers::types::{HeaderError, SizeHeader};

/// Read the 8-byte little-endian header at the start of `buf`.
#[inline]
pub fn decode_size_header_le(buf: &[u8]) -> Result<SizeHeader, HeaderError> {
    if buf.len() < SizeHeader::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: SizeHeader::LEN });
    }
    Ok(SizeHeader { original_len: LittleEndian::read_u64(&buf[..SizeHeader::LEN]) })
}

/// Split a headered frame into its header and the codec payload behind it.
///
/// Zero-copy: the payload borrows from `frame`.
#[inline]
pub fn split_frame(frame: &[u8]) -> Result<(SizeHeader, &[u8]), HeaderError> {
    let header = decode_size_header_le(frame)?;
    Ok((header, &frame[SizeHeader::LEN..]))
}
