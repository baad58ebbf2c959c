// demos/idle_tuning.rs
// Run with:
//   RUST_LOG=debug cargo run --example idle_tuning

use idle_economy::EconomyConfig;
use idle_economy::systems::autoplay::SessionConfig;
use idle_economy::systems::cost_tuning::{Bounds, Gains, Targets, tune_cost_scale};

fn main() -> Result<(), idle_economy::EconomyError> {
    env_logger::init();

    let base = EconomyConfig { starting_currency: 15.0, ..EconomyConfig::default() };

    // Every building should be on screen ten minutes into a session.
    let out = tune_cost_scale(
        &base,
        Targets { all_unlocked_secs: 600.0, tolerance: 0.03 },
        SessionConfig::default(),
        Bounds::soft(),
        Gains::default(),
        64,
    )?;

    println!("== Cost Tuning ==");
    println!("θ -> {:?}", out.theta);
    println!("π -> {:?}", out.obs);
    println!("iters: {}  converged: {}", out.iters, out.converged);
    println!("{}", base.with_cost_scale(out.theta.cost_scale).to_json_string()?);
    Ok(())
}
