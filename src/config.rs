//! Designer-supplied economy configuration.
//!
//! The roster is fixed once an [`Economy`](crate::Economy) is built from it.
//! Definitions can come from code ([`EconomyConfig::default`]) or from JSON:
//!
//! ```json
//! {
//!   "starting_currency": 0.0,
//!   "debug_grant": 100000.0,
//!   "units": [
//!     { "name": "Cursor", "base_rate": 0.1, "base_cost": 15.0, "upgrade_base_cost": 100.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::economy::UnitDef;
use crate::error::EconomyError;

/// Lump granted by the host's debug shortcut.
pub const DEFAULT_DEBUG_GRANT: f64 = 100_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    #[serde(default)]
    pub starting_currency: f64,
    #[serde(default = "default_debug_grant")]
    pub debug_grant: f64,
    pub units: Vec<UnitDef>,
}

fn default_debug_grant() -> f64 {
    DEFAULT_DEBUG_GRANT
}

impl Default for EconomyConfig {
    /// Four buildings, each roughly an order of magnitude above the last.
    fn default() -> Self {
        Self {
            starting_currency: 0.0,
            debug_grant: DEFAULT_DEBUG_GRANT,
            units: vec![
                UnitDef::new("Cursor", 0.1, 15.0, 100.0),
                UnitDef::new("Grandma", 1.0, 100.0, 1_000.0),
                UnitDef::new("Farm", 8.0, 1_100.0, 11_000.0),
                UnitDef::new("Mine", 47.0, 12_000.0, 120_000.0),
            ],
        }
    }
}

impl EconomyConfig {
    pub fn from_json_str(s: &str) -> Result<Self, EconomyError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, EconomyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects an empty roster and definitions with negative or non-finite numbers.
    pub fn validate(&self) -> Result<(), EconomyError> {
        if self.units.is_empty() {
            return Err(EconomyError::EmptyRoster);
        }
        for (field, v) in [("starting_currency", self.starting_currency), ("debug_grant", self.debug_grant)] {
            if !v.is_finite() {
                return Err(EconomyError::InvalidDefinition {
                    name: field.into(),
                    reason: format!("must be finite, got {v}"),
                });
            }
        }
        self.units.iter().try_for_each(UnitDef::validate)
    }

    /// Same roster with every base and upgrade cost multiplied by `scale`.
    /// The starting purse is priced in the same units and scales with them.
    pub fn with_cost_scale(&self, scale: f64) -> Self {
        let mut out = self.clone();
        out.starting_currency *= scale;
        for u in &mut out.units {
            u.base_cost *= scale;
            u.upgrade_base_cost *= scale;
        }
        out
    }
}
