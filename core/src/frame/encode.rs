//! frame/encode.rs
//!
//! Encoder: one bounded allocation, one compress call, optional size header.
//!
//! Layout:
//!
//! ```text
//! [ original_len (8, LE u64) ]   -- Headered only
//! [ codec output (M) ]           -- M <= N + N/16 + 64 + 3
//! ```
use tracing::debug;

use crate::compression::{max_compressed_len, Codec, CodecError, CodecStatus, Lzo1x};
use crate::frame::layout::FrameLayout;
use crate::headers::{encode_size_header_le, SizeHeader};
use crate::telemetry::FrameCounters;
use crate::types::{EncodeError, FailureReason};
use crate::utils::try_alloc_zeroed;

pub struct FrameEncoder<C: Codec> {
    codec: C,
    counters: FrameCounters,
}

impl FrameEncoder<Lzo1x> {
    /// Encoder over the default LZO1X-1 codec.
    pub fn lzo() -> Result<Self, CodecError> {
        Ok(Self::new(Lzo1x::new()?))
    }
}

impl<C: Codec> FrameEncoder<C> {
    pub fn new(codec: C) -> Self {
        Self { codec, counters: FrameCounters::default() }
    }

    pub fn counters(&self) -> &FrameCounters {
        &self.counters
    }

    pub fn into_parts(self) -> (C, FrameCounters) {
        (self.codec, self.counters)
    }

    /// Compress `raw` into a complete frame.
    ///
    /// The codec writes straight behind the header slot, so the frame is
    /// assembled in a single buffer. Any non-Ok status is fatal: the capacity
    /// bound is sufficient for every input, so a failure is a codec fault.
    ///
    /// # Panics
    /// If the codec reports writing more than the capacity it was given.
    pub fn encode(&mut self, raw: &[u8], layout: FrameLayout) -> Result<Vec<u8>, EncodeError> {
        let header_len = layout.header_len();
        let capacity = max_compressed_len(raw.len());
        let requested = header_len.saturating_add(capacity);

        let mut out = try_alloc_zeroed(requested)
            .map_err(|_| EncodeError::OutOfMemory { requested })?;
        debug!(input_len = raw.len(), capacity, ?layout, "compressing");

        self.counters.add_codec_call(capacity);
        let written = match self.codec.compress(raw, &mut out[header_len..]) {
            CodecStatus::Ok(n) => n,
            CodecStatus::OutputBufferTooSmall => {
                return Err(EncodeError::CodecFailure {
                    codec: self.codec.name(),
                    input_len: raw.len(),
                    reason: FailureReason::OutputBufferTooSmall { capacity },
                });
            }
            CodecStatus::OtherFailure(code) => {
                return Err(EncodeError::CodecFailure {
                    codec: self.codec.name(),
                    input_len: raw.len(),
                    reason: FailureReason::Status(code),
                });
            }
        };
        assert!(
            written <= capacity,
            "codec {} wrote {} bytes into {} bytes of capacity",
            self.codec.name(),
            written,
            capacity
        );

        if layout.has_header() {
            let header = SizeHeader::new(raw.len());
            out[..header_len].copy_from_slice(&encode_size_header_le(&header));
            self.counters.add_header(header_len);
        }
        out.truncate(header_len + written);

        self.counters.finish(raw.len(), out.len());
        debug!(input_len = raw.len(), frame_len = out.len(), "compressed");
        Ok(out)
    }
}
