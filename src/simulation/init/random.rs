/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in [lo, hi]. Collapses to the midpoint if the range is inverted.
pub(super) fn range(state: &mut u32, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return (lo + hi) * 0.5;
    }
    let unit = xorshift32(state) as f64 / u32::MAX as f64;
    lo + unit * (hi - lo)
}
