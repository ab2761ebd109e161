//! frame/decode.rs
//!
//! Decoder for both layouts.
//!
//! - Headered: the declared length is the exact output length. It is checked
//!   against the sanity bound, allocated once, and the codec must fill it exactly.
//! - Headerless: the growth ladder guesses capacities (see `ladder.rs`).
use tracing::debug;

use crate::compression::{Codec, CodecError, CodecStatus, Lzo1x};
use crate::config::{ConfigError, FrameConfig};
use crate::frame::ladder::GrowthLadder;
use crate::frame::layout::FrameLayout;
use crate::headers::{split_frame, HeaderError, SizeHeader};
use crate::telemetry::FrameCounters;
use crate::types::{DecodeError, FailureReason};
use crate::utils::try_alloc_zeroed;

pub struct FrameDecoder<C: Codec> {
    codec: C,
    config: FrameConfig,
    counters: FrameCounters,
}

impl FrameDecoder<Lzo1x> {
    /// Decoder over the default LZO1X-1 codec with the default config.
    pub fn lzo() -> Result<Self, CodecError> {
        Ok(Self::new(Lzo1x::new()?))
    }
}

impl<C: Codec> FrameDecoder<C> {
    pub fn new(codec: C) -> Self {
        Self { codec, config: FrameConfig::default(), counters: FrameCounters::default() }
    }

    pub fn with_config(codec: C, config: FrameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { codec, config, counters: FrameCounters::default() })
    }

    pub fn counters(&self) -> &FrameCounters {
        &self.counters
    }

    pub fn into_parts(self) -> (C, FrameCounters) {
        (self.codec, self.counters)
    }

    pub fn decode(&mut self, frame: &[u8], layout: FrameLayout) -> Result<Vec<u8>, DecodeError> {
        let raw = match layout {
            FrameLayout::Headered => self.decode_headered(frame)?,
            FrameLayout::Headerless => self.decode_headerless(frame)?,
        };
        self.counters.finish(raw.len(), frame.len());
        debug!(frame_len = frame.len(), raw_len = raw.len(), ?layout, "decompressed");
        Ok(raw)
    }

    fn decode_headered(&mut self, frame: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let (header, payload) = split_frame(frame)?;
        self.counters.add_header(SizeHeader::LEN);

        // A zero length only stands for the codec's own empty stream.
        if header.is_empty() {
            if self.codec.is_empty_stream(payload) {
                return Ok(Vec::new());
            }
            return Err(HeaderError::DeclaredLenZero { payload_len: payload.len() }.into());
        }

        let declared = header.validate(self.config.max_declared_len)?;
        let mut out = try_alloc_zeroed(declared)
            .map_err(|_| DecodeError::OutOfMemory { requested: declared })?;
        debug!(declared, payload_len = payload.len(), "headered decode");

        self.counters.add_codec_call(declared);
        let codec = self.codec.name();
        let failure = |reason| DecodeError::CodecFailure { codec, attempts: 1, reason };
        match self.codec.decompress(payload, &mut out) {
            CodecStatus::Ok(n) if n == declared => Ok(out),
            CodecStatus::Ok(n) => Err(DecodeError::LengthMismatch { declared, actual: n }),
            CodecStatus::OutputBufferTooSmall => {
                Err(failure(FailureReason::OutputBufferTooSmall { capacity: declared }))
            }
            CodecStatus::OtherFailure(code) => Err(failure(FailureReason::Status(code))),
        }
    }

    fn decode_headerless(&mut self, frame: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let ladder = GrowthLadder::new(&self.config.ladder, frame.len());
        ladder.climb(&mut self.codec, frame, &mut self.counters)
    }
}
