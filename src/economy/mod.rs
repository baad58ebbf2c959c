// src/economy/mod.rs

// The economy engine: owned state, the four formulas, and a read-only view
// for the presentation layer.

pub mod engine;
pub mod unit;
pub mod view;

pub use engine::Economy;
pub use unit::{ProductionUnit, UnitDef};
pub use view::{EconomyView, UnitView};
