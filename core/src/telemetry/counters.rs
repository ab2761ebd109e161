//! telemetry/counters.rs
//! Mutable counters collected while a frame is encoded or decoded.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounters {
    /// Compress and decompress calls made, including failed ladder rungs.
    pub codec_calls: u64,
    /// Output capacity allocated across all codec calls.
    pub bytes_committed: u64,
    /// Raw (uncompressed) bytes in or out.
    pub bytes_raw: u64,
    /// Full frame length, header included.
    pub bytes_frame: u64,
    /// Size header bytes written or read.
    pub bytes_header: u64,
}

impl FrameCounters {
    /// Record one codec call made against `capacity` bytes of output.
    pub fn add_codec_call(&mut self, capacity: usize) {
        self.codec_calls += 1;
        self.bytes_committed += capacity as u64;
    }

    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    /// Record the two ends of a finished pipeline.
    pub fn finish(&mut self, raw_len: usize, frame_len: usize) {
        self.bytes_raw += raw_len as u64;
        self.bytes_frame += frame_len as u64;
    }

    /// Codec payload bytes, i.e. the frame without its header.
    pub fn payload_bytes(&self) -> u64 {
        self.bytes_frame.saturating_sub(self.bytes_header)
    }

    pub fn merge(&mut self, other: &FrameCounters) {
        self.codec_calls += other.codec_calls;
        self.bytes_committed += other.bytes_committed;
        self.bytes_raw += other.bytes_raw;
        self.bytes_frame += other.bytes_frame;
        self.bytes_header += other.bytes_header;
    }
}

impl AddAssign for FrameCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
