use std::collections::TryReserveError;

/// Allocate a zero-filled buffer of exactly `len` bytes.
///
/// An unsatisfiable request is probed with `try_reserve_exact` and comes back
/// as an error instead of aborting the process. The buffer itself comes from
/// `vec!`, which takes zeroed pages from the allocator without touching them.
pub fn try_alloc_zeroed(len: usize) -> Result<Vec<u8>, TryReserveError> {
    Vec::<u8>::new().try_reserve_exact(len)?;
    Ok(vec![0u8; len])
}

/// Compressed-to-raw size ratio; 0.0 for empty raw input.
pub fn ratio(compressed: u64, raw: u64) -> f64 {
    if raw == 0 {
        0.0
    } else {
        compressed as f64 / raw as f64
    }
}
