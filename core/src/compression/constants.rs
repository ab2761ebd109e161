/// Stable codec names used in errors, logs and telemetry.
pub mod codec_names {
    pub const LZO1X_1: &str = "lzo1x-1";
}

/// Fixed overhead of the LZO1X-1 worst-case bound (`64 + 3`).
pub const LZO1X_1_FIXED_OVERHEAD: usize = 64 + 3;

/// Worst-case compressed size of `len` input bytes for LZO1X-1.
///
/// `len + len / 16 + 64 + 3`. A single compress call into a buffer of this
/// size always succeeds; the encoder never probes for a smaller one.
#[inline]
pub const fn max_compressed_len(len: usize) -> usize {
    len.saturating_add(len / 16)
        .saturating_add(LZO1X_1_FIXED_OVERHEAD)
}
