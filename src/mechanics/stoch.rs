/// Stochastic mechanics: seeded RNG helpers for policies.
/// Uses `bevy_prng::WyRand` so sessions are reproducible per seed.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// A `WyRand` seeded from a plain `u64`.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform sample in [0, 1) with 53 bits of precision.
#[inline]
pub fn unit_f64(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform index in `0..len`; `None` for an empty range.
#[inline]
pub fn pick_index(rng: &mut WyRand, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let i = (unit_f64(rng) * len as f64) as usize;
    Some(i.min(len - 1))
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli(rng: &mut WyRand, p: f64) -> bool {
    unit_f64(rng) < p.clamp(0.0, 1.0)
}
