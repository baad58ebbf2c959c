/// Production mechanics: per-unit output and accrual over a time step.

/// Output of one building kind: count · base_rate · (level + 1).
///
/// Levels are a flat additive bonus (level 0 = 1×, level 1 = 2×, …).
#[inline]
pub fn unit_rate(count: u32, base_rate: f64, upgrade_level: u32) -> f64 {
    f64::from(count) * base_rate * (f64::from(upgrade_level) + 1.0)
}

/// Currency earned over `elapsed_secs` at `rate` per second.
#[inline]
pub fn accrued(rate: f64, elapsed_secs: f64) -> f64 {
    rate * elapsed_secs
}

/// Seconds until `balance` reaches `cost` at `rate` (0 if already there,
/// `f64::INFINITY` if it never will).
#[inline]
pub fn time_to_afford(balance: f64, cost: f64, rate: f64) -> f64 {
    let gap = cost - balance;
    if gap <= 0.0 {
        0.0
    } else if rate > 0.0 {
        gap / rate
    } else {
        f64::INFINITY
    }
}
