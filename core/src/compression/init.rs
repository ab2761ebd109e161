//! compression/init.rs
//! Process-wide, idempotent codec initialization.
//!
//! The first call runs a compress/decompress self-check of the LZO1X-1
//! back-end and caches the verdict; later calls return the cached verdict.
use std::sync::OnceLock;

use tracing::debug;

use crate::compression::codecs::lzo::Lzo1x;
use crate::compression::types::CodecError;

static LZO_READY: OnceLock<Result<(), CodecError>> = OnceLock::new();

/// Initialize the codec once per process.
pub fn init() -> Result<(), CodecError> {
    LZO_READY
        .get_or_init(|| {
            let verdict = Lzo1x::self_check();
            debug!(ok = verdict.is_ok(), "lzo1x-1 initialized");
            verdict
        })
        .clone()
}
