pub mod control;
pub mod cost;
pub mod production;
pub mod stoch;
