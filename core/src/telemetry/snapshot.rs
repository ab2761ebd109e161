//! telemetry/snapshot.rs
//! Immutable end-of-run telemetry.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::FrameCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};
use crate::utils::ratio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub codec_calls: u64,
    pub bytes_committed: u64,
    pub bytes_raw: u64,
    pub bytes_frame: u64,
    pub bytes_header: u64,
    /// Codec payload over raw bytes; above 1.0 for incompressible input.
    pub compression_ratio: f64,
    pub throughput_raw_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &FrameCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_raw as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            codec_calls: counters.codec_calls,
            bytes_committed: counters.bytes_committed,
            bytes_raw: counters.bytes_raw,
            bytes_frame: counters.bytes_frame,
            bytes_header: counters.bytes_header,
            compression_ratio: ratio(counters.payload_bytes(), counters.bytes_raw),
            throughput_raw_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal consistency: header within frame, stage times within elapsed.
    pub fn sanity_check(&self) -> bool {
        self.bytes_header <= self.bytes_frame && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
