//! Read-only snapshot the host renders after each mutation.
//! Label strings follow the host's widget formats.

use serde::Serialize;

use crate::economy::unit::ProductionUnit;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EconomyView {
    pub currency: f64,
    pub production_rate: f64,
    pub units: Vec<UnitView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitView {
    pub name: String,
    pub count: u32,
    pub upgrade_level: u32,
    pub unlocked: bool,
    pub purchase_cost: f64,
    pub upgrade_cost: f64,
}

impl EconomyView {
    pub fn currency_label(&self) -> String {
        format!("{}", self.currency)
    }

    pub fn rate_label(&self) -> String {
        format!("CpS: {}", self.production_rate)
    }
}

impl UnitView {
    pub(crate) fn from_unit(u: &ProductionUnit) -> Self {
        Self {
            name: u.name().to_owned(),
            count: u.count(),
            upgrade_level: u.upgrade_level(),
            unlocked: u.unlocked(),
            purchase_cost: u.purchase_cost(),
            upgrade_cost: u.upgrade_cost(),
        }
    }

    /// "Name (Lv. N)", levels shown 1-based.
    pub fn title_label(&self) -> String {
        format!("{} (Lv. {})", self.name, self.upgrade_level + 1)
    }

    pub fn count_label(&self) -> String {
        self.count.to_string()
    }

    pub fn cost_label(&self) -> String {
        format!("Cost: {}", self.purchase_cost)
    }

    pub fn upgrade_label(&self) -> String {
        format!("Upgrade: {}", self.upgrade_cost)
    }
}
