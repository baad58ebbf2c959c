/// Cost curves: purchase price grows 15% per owned unit, upgrades 10× per level.

/// Purchase growth per instance already owned.
pub const PURCHASE_GROWTH: f64 = 1.15;
/// Upgrade growth per level already reached.
pub const UPGRADE_GROWTH: f64 = 10.0;

/// Price of the next instance: base · g^count.
#[inline]
pub fn purchase(base_cost: f64, count: u32) -> f64 {
    scaled(base_cost, PURCHASE_GROWTH, count)
}

/// Price of the next upgrade level: base · 10^level.
#[inline]
pub fn upgrade(upgrade_base_cost: f64, level: u32) -> f64 {
    scaled(upgrade_base_cost, UPGRADE_GROWTH, level)
}

/// Generic exponential curve: base · growth^steps.
#[inline]
pub fn scaled(base: f64, growth: f64, steps: u32) -> f64 {
    base * growth.powf(f64::from(steps))
}

/// Can `balance` pay `cost`? Equality counts as affordable.
#[inline]
pub fn affordable(balance: f64, cost: f64) -> bool {
    balance >= cost
}
