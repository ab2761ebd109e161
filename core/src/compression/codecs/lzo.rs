//! codecs/lzo.rs
//! LZO1X-1 block codec backed by `rust-lzo`.
//!
//! Design notes:
//! - Compression uses a per-instance work memory owned by `LZOContext`.
//! - Decompression is the bounds-checked ("safe") LZO1X decoder, so a short
//!   output buffer yields `OUTPUT_OVERRUN` instead of writing past it.
//! - LZO status codes are mapped onto `CodecStatus`; the raw code is kept for diagnostics.
use rust_lzo::{LZOContext, LZOError};

use crate::compression::constants::{codec_names, max_compressed_len};
use crate::compression::init::init;
use crate::compression::types::{Codec, CodecError, CodecStatus};

/// Sample used by the one-time self-check: a literal run followed by a long match.
const SELF_CHECK_SAMPLE: &[u8] = b"lzframe self-check: 0123456789abcdef \
    repeat repeat repeat repeat repeat repeat repeat repeat repeat repeat";

/// Every LZO1X stream ends with a 3-byte end-of-stream marker.
const LZO_MIN_STREAM_LEN: usize = 3;

pub struct Lzo1x {
    ctx: LZOContext,
}

impl Lzo1x {
    /// Create a codec instance, running process-wide initialization first.
    pub fn new() -> Result<Self, CodecError> {
        init()?;
        Ok(Self::unchecked())
    }

    fn unchecked() -> Self {
        Self { ctx: LZOContext::new() }
    }

    /// Round-trip a fixed sample through a fresh instance.
    pub(crate) fn self_check() -> Result<(), CodecError> {
        let mut codec = Self::unchecked();
        let fail = |msg: String| CodecError::InitFailed { codec: codec_names::LZO1X_1, msg };

        let mut packed = vec![0u8; max_compressed_len(SELF_CHECK_SAMPLE.len())];
        let packed_len = match codec.compress(SELF_CHECK_SAMPLE, &mut packed) {
            CodecStatus::Ok(n) => n,
            other => return Err(fail(format!("compress: {}", other))),
        };

        let mut unpacked = vec![0u8; SELF_CHECK_SAMPLE.len()];
        match codec.decompress(&packed[..packed_len], &mut unpacked) {
            CodecStatus::Ok(n) if n == SELF_CHECK_SAMPLE.len() && unpacked == SELF_CHECK_SAMPLE => Ok(()),
            CodecStatus::Ok(n) => Err(fail(format!("sample mismatch after {} bytes", n))),
            other => Err(fail(format!("decompress: {}", other))),
        }
    }
}

fn status_of(err: LZOError, written: usize) -> CodecStatus {
    match err {
        LZOError::OK => CodecStatus::Ok(written),
        LZOError::OUTPUT_OVERRUN => CodecStatus::OutputBufferTooSmall,
        other => CodecStatus::OtherFailure(other as i32),
    }
}

impl Codec for Lzo1x {
    fn name(&self) -> &'static str {
        codec_names::LZO1X_1
    }

    fn compress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        // LZO1X-1 does not bounds-check its output: refuse anything below the worst case.
        if output.len() < max_compressed_len(input.len()) {
            return CodecStatus::OutputBufferTooSmall;
        }
        let (written, err) = self.ctx.compress_to_slice(input, output);
        let written = written.len();
        status_of(err, written)
    }

    fn decompress(&mut self, input: &[u8], output: &mut [u8]) -> CodecStatus {
        // Shorter than the end-of-stream marker: the decoder would read past the input.
        if input.len() < LZO_MIN_STREAM_LEN {
            return CodecStatus::OtherFailure(LZOError::INPUT_OVERRUN as i32);
        }
        let (written, err) = LZOContext::decompress_to_slice(input, output);
        let written = written.len();
        status_of(err, written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_passes() {
        Lzo1x::self_check().unwrap();
    }

    #[test]
    fn short_output_reports_buffer_too_small() {
        let mut codec = Lzo1x::new().unwrap();
        let input = vec![b'a'; 4096];
        let mut packed = vec![0u8; max_compressed_len(input.len())];
        let CodecStatus::Ok(n) = codec.compress(&input, &mut packed) else {
            panic!("compress failed");
        };

        let mut small = vec![0u8; 100];
        assert_eq!(codec.decompress(&packed[..n], &mut small), CodecStatus::OutputBufferTooSmall);
    }

    #[test]
    fn compress_refuses_output_below_the_bound() {
        let mut codec = Lzo1x::new().unwrap();
        let input = [0u8; 4096];
        let mut small = [0u8; 16];
        assert_eq!(codec.compress(&input, &mut small), CodecStatus::OutputBufferTooSmall);

        let mut one_short = vec![0u8; max_compressed_len(input.len()) - 1];
        assert_eq!(codec.compress(&input, &mut one_short), CodecStatus::OutputBufferTooSmall);
        assert!(one_short.iter().all(|&b| b == 0));
    }

    #[test]
    fn truncated_stream_is_other_failure() {
        let mut codec = Lzo1x::new().unwrap();
        let input = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
        let mut packed = vec![0u8; max_compressed_len(input.len())];
        let CodecStatus::Ok(n) = codec.compress(&input, &mut packed) else {
            panic!("compress failed");
        };

        let mut out = vec![0u8; input.len() * 2];
        assert!(matches!(
            codec.decompress(&packed[..n / 2], &mut out),
            CodecStatus::OtherFailure(_)
        ));
    }

    #[test]
    fn empty_input_has_canonical_stream() {
        let mut codec = Lzo1x::new().unwrap();
        let mut packed = vec![0u8; max_compressed_len(0)];
        let CodecStatus::Ok(n) = codec.compress(&[], &mut packed) else {
            panic!("compress failed");
        };
        assert!(codec.is_empty_stream(&packed[..n]));
        assert!(!codec.is_empty_stream(&[0xde, 0xad, 0xbe, 0xef]));
    }
}
