use serde::{Deserialize, Serialize};

use crate::error::EconomyError;
use crate::mechanics::{cost, production};

/// Static definition of a building, as a designer writes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitDef {
    pub name: String,
    /// Output per owned instance per upgrade tier.
    pub base_rate: f64,
    /// Price of the first instance; also the unlock threshold.
    pub base_cost: f64,
    pub upgrade_base_cost: f64,
    /// Visible from the start, without waiting for the balance to reach `base_cost`.
    #[serde(default)]
    pub unlocked: bool,
    /// Instances owned when play starts.
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub upgrade_level: u32,
}

impl UnitDef {
    pub fn new(name: impl Into<String>, base_rate: f64, base_cost: f64, upgrade_base_cost: f64) -> Self {
        Self {
            name: name.into(),
            base_rate,
            base_cost,
            upgrade_base_cost,
            unlocked: false,
            count: 0,
            upgrade_level: 0,
        }
    }

    pub fn starts_unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    /// Start play already owning `count` instances at `upgrade_level`.
    pub fn owned(mut self, count: u32, upgrade_level: u32) -> Self {
        self.count = count;
        self.upgrade_level = upgrade_level;
        self
    }

    pub fn validate(&self) -> Result<(), EconomyError> {
        let fields = [
            ("base_rate", self.base_rate),
            ("base_cost", self.base_cost),
            ("upgrade_base_cost", self.upgrade_base_cost),
        ];
        for (field, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(EconomyError::InvalidDefinition {
                    name: self.name.clone(),
                    reason: format!("{field} must be finite and non-negative, got {v}"),
                });
            }
        }
        Ok(())
    }
}

/// A building in play: its definition plus what the player owns of it.
///
/// `count`, `upgrade_level` and `unlocked` only move forward, and only the
/// [`Economy`](crate::Economy) moves them.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionUnit {
    def: UnitDef,
    count: u32,
    upgrade_level: u32,
    unlocked: bool,
}

impl ProductionUnit {
    pub(crate) fn new(def: UnitDef) -> Self {
        Self {
            count: def.count,
            upgrade_level: def.upgrade_level,
            unlocked: def.unlocked,
            def,
        }
    }

    pub fn name(&self) -> &str { &self.def.name }
    pub fn base_rate(&self) -> f64 { self.def.base_rate }
    pub fn base_cost(&self) -> f64 { self.def.base_cost }
    pub fn upgrade_base_cost(&self) -> f64 { self.def.upgrade_base_cost }
    pub fn count(&self) -> u32 { self.count }
    pub fn upgrade_level(&self) -> u32 { self.upgrade_level }
    pub fn unlocked(&self) -> bool { self.unlocked }
    pub fn def(&self) -> &UnitDef { &self.def }

    /// Price of the next instance.
    pub fn purchase_cost(&self) -> f64 {
        cost::purchase(self.def.base_cost, self.count)
    }

    /// Price of the next upgrade level.
    pub fn upgrade_cost(&self) -> f64 {
        cost::upgrade(self.def.upgrade_base_cost, self.upgrade_level)
    }

    /// Currency per second this building currently contributes.
    pub fn rate(&self) -> f64 {
        production::unit_rate(self.count, self.def.base_rate, self.upgrade_level)
    }

    pub(crate) fn add_one(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub(crate) fn level_up(&mut self) {
        self.upgrade_level = self.upgrade_level.saturating_add(1);
    }

    /// Unlocks once `balance` reaches the base cost. Returns true on the transition.
    pub(crate) fn try_unlock(&mut self, balance: f64) -> bool {
        if !self.unlocked && cost::affordable(balance, self.def.base_cost) {
            self.unlocked = true;
            return true;
        }
        false
    }
}
