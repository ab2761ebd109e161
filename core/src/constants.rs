/// Width of the optional original-size header (little-endian `u64`).
pub const SIZE_HEADER_LEN: usize = 8;

/// Headerless decode capacity multipliers of the compressed length, tried in order.
/// Attempt 1 assumes a typical expansion ratio; attempt 2 is an order of magnitude above it.
pub const DEFAULT_LADDER: [usize; 2] = [3, 10];

/// Upper bound on the number of ladder rungs (codec invocations) per decode.
pub const MAX_LADDER_RUNGS: usize = 2;

/// Largest declared original length accepted from a size header:
/// half the addressable range of `usize` on this platform.
pub const MAX_DECLARED_LEN: u64 = (usize::MAX / 2) as u64;
