//! telemetry/mod.rs
//! Counters, stage timers and an immutable snapshot for one encode or decode run.
//!
//! - Counters are plain fields updated by the pipeline that owns them; no atomics.
//! - The snapshot is built once at the end and serialized for `--stats` output.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
