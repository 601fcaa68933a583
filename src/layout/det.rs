//! Index-seeded pseudo-random values
//!
//! A sine hash: cheap, stateless, and identical wherever it runs. The sine
//! comes from `libm` rather than the platform so native export and the wasm
//! module see the same bits.

/// Index multiplier inside the sine
const INDEX_SCALE: f64 = 127.1;
/// Seed multiplier inside the sine
const SEED_SCALE: f64 = 0.01;
/// Spreads the sine output over many integer periods
const SPREAD: f64 = 43758.5453;

/// Pseudo-random value in [0, 1) for `index` under `seed`.
///
/// Pure: the same `(index, seed)` always returns the same value.
#[inline]
pub fn det(index: u64, seed: f64) -> f64 {
    let x = libm::sin(index as f64 * INDEX_SCALE + seed * SEED_SCALE) * SPREAD;
    let frac = (x - libm::floor(x)).abs();
    // x - floor(x) rounds up to 1.0 for x just below an integer
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Index in `0..len` picked by `det(index, seed)`.
///
/// `len` must be non-zero.
#[inline]
pub fn pick(index: u64, seed: f64, len: usize) -> usize {
    ((det(index, seed) * len as f64) as usize).min(len - 1)
}

/// Round to `places` decimals, matching how values are printed into markup.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    libm::round(value * scale) / scale
}
