// src/economy/engine.rs

//! # Economy engine
//!
//! Owns the balance, the derived currency-per-second rate and the building
//! roster. Everything that changes state goes through one of four calls:
//!
//! - [`Economy::add_currency`] — signed accrual, then the unlock scan;
//! - [`Economy::tick`] — `add_currency(rate · dt)` for one host frame;
//! - [`Economy::purchase`] — buy one instance at `base · 1.15^count`;
//! - [`Economy::upgrade`] — raise a level at `upgrade_base · 10^level`.
//!
//! The rate is recomputed after every count or level change and at no other
//! time; costs are always derived from the current count/level.
//!
//! The engine is host-agnostic: it never assumes a frame interval and never
//! touches the presentation layer. Hosts read [`Economy::view`] after a
//! mutation to refresh their widgets.

use log::{debug, trace};

use crate::config::EconomyConfig;
use crate::economy::unit::ProductionUnit;
use crate::economy::view::{EconomyView, UnitView};
use crate::error::EconomyError;
use crate::mechanics::{cost, production};

#[derive(Clone, Debug)]
pub struct Economy {
    currency: f64,
    production_rate: f64,
    units: Vec<ProductionUnit>,
    debug_grant: f64,
}

impl Economy {
    pub fn new(config: EconomyConfig) -> Result<Self, EconomyError> {
        config.validate()?;
        let mut eco = Self {
            currency: 0.0,
            production_rate: 0.0,
            units: config.units.into_iter().map(ProductionUnit::new).collect(),
            debug_grant: config.debug_grant,
        };
        eco.recompute_production_rate();
        // The starting purse counts as accrual, so it can unlock buildings.
        eco.add_currency(config.starting_currency);
        Ok(eco)
    }

    /// Signed accrual. Negative amounts debit without clamping at zero.
    ///
    /// Every call rescans locked units, so a building unlocks on the first
    /// accrual that brings the balance up to its base cost.
    pub fn add_currency(&mut self, amount: f64) {
        self.currency += amount;
        let balance = self.currency;
        for u in self.units.iter_mut() {
            if u.try_unlock(balance) {
                debug!("unlocked `{}` at balance {:.2}", u.name(), balance);
            }
        }
    }

    /// Accrue one host frame's worth of production.
    pub fn tick(&mut self, elapsed_secs: f64) {
        self.add_currency(production::accrued(self.production_rate, elapsed_secs));
    }

    /// Host debug shortcut: grant the configured lump through the normal accrual path.
    pub fn grant_debug(&mut self) {
        self.add_currency(self.debug_grant);
    }

    /// Buy one instance of unit `index`. `Ok(false)` when unaffordable (no state change).
    pub fn purchase(&mut self, index: usize) -> Result<bool, EconomyError> {
        let price = self.unit(index)?.purchase_cost();
        if !cost::affordable(self.currency, price) {
            trace!("purchase of unit {index} refused: {:.2} < {:.2}", self.currency, price);
            return Ok(false);
        }
        self.currency -= price;
        let u = &mut self.units[index];
        u.add_one();
        debug!("bought `{}` #{} for {:.2}", u.name(), u.count(), price);
        self.recompute_production_rate();
        Ok(true)
    }

    /// Raise unit `index` one upgrade level. `Ok(false)` when unaffordable (no state change).
    pub fn upgrade(&mut self, index: usize) -> Result<bool, EconomyError> {
        let price = self.unit(index)?.upgrade_cost();
        if !cost::affordable(self.currency, price) {
            trace!("upgrade of unit {index} refused: {:.2} < {:.2}", self.currency, price);
            return Ok(false);
        }
        self.currency -= price;
        let u = &mut self.units[index];
        u.level_up();
        debug!("upgraded `{}` to level {} for {:.2}", u.name(), u.upgrade_level(), price);
        self.recompute_production_rate();
        Ok(true)
    }

    /// rate = Σ count · base_rate · (level + 1).
    pub fn recompute_production_rate(&mut self) {
        self.production_rate = self.units.iter().map(ProductionUnit::rate).sum();
    }

    pub fn currency(&self) -> f64 {
        self.currency
    }

    pub fn production_rate(&self) -> f64 {
        self.production_rate
    }

    pub fn units(&self) -> &[ProductionUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn unit(&self, index: usize) -> Result<&ProductionUnit, EconomyError> {
        self.units.get(index).ok_or(EconomyError::UnknownUnit {
            index,
            len: self.units.len(),
        })
    }

    pub fn purchase_cost(&self, index: usize) -> Result<f64, EconomyError> {
        Ok(self.unit(index)?.purchase_cost())
    }

    pub fn upgrade_cost(&self, index: usize) -> Result<f64, EconomyError> {
        Ok(self.unit(index)?.upgrade_cost())
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> EconomyView {
        EconomyView {
            currency: self.currency,
            production_rate: self.production_rate,
            units: self.units.iter().map(UnitView::from_unit).collect(),
        }
    }
}
