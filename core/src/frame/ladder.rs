//! frame/ladder.rs
//!
//! Growth ladder for headerless decoding.
//!
//! Headerless frames carry no original length, so the decoder guesses an
//! output capacity from the compressed length. The ladder is a short, fixed
//! list of multipliers: each rung is tried once, only an "output buffer too
//! small" verdict moves to the next rung, and running off the end is fatal.
//! Peak memory is therefore bounded by `len * ladder.last()`.
use tracing::{debug, warn};

use crate::compression::{Codec, CodecStatus};
use crate::telemetry::FrameCounters;
use crate::types::{DecodeError, FailureReason};
use crate::utils::try_alloc_zeroed;

/// Capacity guess for one headerless attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeEstimate {
    /// 1-based attempt number.
    pub attempt: usize,
    pub multiplier: usize,
    pub capacity: usize,
}

#[derive(Copy, Clone, Debug)]
pub struct GrowthLadder<'a> {
    multipliers: &'a [usize],
    input_len: usize,
}

impl<'a> GrowthLadder<'a> {
    pub fn new(multipliers: &'a [usize], input_len: usize) -> Self {
        Self { multipliers, input_len }
    }

    /// Estimates in the order they are tried.
    pub fn estimates(&self) -> impl Iterator<Item = SizeEstimate> + 'a {
        let input_len = self.input_len;
        self.multipliers
            .iter()
            .enumerate()
            .map(move |(i, &multiplier)| SizeEstimate {
                attempt: i + 1,
                multiplier,
                capacity: input_len.saturating_mul(multiplier),
            })
    }

    /// Decompress `payload`, climbing one rung per "output buffer too small".
    ///
    /// Returns the output truncated to exactly the bytes the codec reported.
    pub fn climb<C: Codec>(
        &self,
        codec: &mut C,
        payload: &[u8],
        counters: &mut FrameCounters,
    ) -> Result<Vec<u8>, DecodeError> {
        let mut exhausted: Option<SizeEstimate> = None;

        for estimate in self.estimates() {
            let mut out = try_alloc_zeroed(estimate.capacity)
                .map_err(|_| DecodeError::OutOfMemory { requested: estimate.capacity })?;
            debug!(
                attempt = estimate.attempt,
                multiplier = estimate.multiplier,
                capacity = estimate.capacity,
                "headerless decode attempt"
            );

            counters.add_codec_call(estimate.capacity);
            match codec.decompress(payload, &mut out) {
                CodecStatus::Ok(n) => {
                    out.truncate(n);
                    return Ok(out);
                }
                CodecStatus::OutputBufferTooSmall => {
                    warn!(capacity = estimate.capacity, "output buffer too small, escalating");
                    exhausted = Some(estimate);
                }
                CodecStatus::OtherFailure(code) => {
                    return Err(DecodeError::CodecFailure {
                        codec: codec.name(),
                        attempts: estimate.attempt,
                        reason: FailureReason::Status(code),
                    });
                }
            }
        }

        match exhausted {
            Some(last) => Err(DecodeError::CodecFailure {
                codec: codec.name(),
                attempts: last.attempt,
                reason: FailureReason::OutputBufferTooSmall { capacity: last.capacity },
            }),
            // Unreachable with a validated config: an empty ladder makes no attempt.
            None => Err(crate::config::ConfigError::EmptyLadder.into()),
        }
    }
}
