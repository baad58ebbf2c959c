/// Control mechanics: proportional updates.

/// Proportional approach: x' = clamp(x + k * (target - x)).
#[inline]
pub fn approach(x: f64, target: f64, k: f64, lo: f64, hi: f64) -> f64 {
    (x + k * (target - x)).clamp(lo, hi)
}

/// Multiplicative correction toward a measured/target ratio,
/// with the per-step ratio clamped to `[1/max_step, max_step]`.
#[inline]
pub fn ratio_target(x: f64, target: f64, measured: f64, max_step: f64) -> f64 {
    let max_step = max_step.max(1.0);
    let ratio = (target / measured.max(1e-9)).clamp(1.0 / max_step, max_step);
    x * ratio
}
