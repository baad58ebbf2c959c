// demos/idle.rs
// Run with:
//   RUST_LOG=debug cargo run --example idle

use idle_economy::systems::autoplay::{Payback, SessionConfig, run_session};
use idle_economy::{Economy, EconomyConfig, EconomyError};

fn main() -> Result<(), EconomyError> {
    env_logger::init();

    // Default roster, with enough in the purse for the first building.
    let cfg = EconomyConfig { starting_currency: 15.0, ..EconomyConfig::default() };
    let mut eco = Economy::new(cfg)?;

    let session = SessionConfig { duration_secs: 1_800.0, dt: 0.25, max_actions_per_tick: 64 };
    let report = run_session(&mut eco, &mut Payback, &session)?;

    println!("== Idle Session ({}s) ==", report.elapsed_secs);
    let view = eco.view();
    println!("{}  {}", view.currency_label(), view.rate_label());
    for (u, t) in view.units.iter().zip(&report.unlock_times) {
        let unlocked = t.map_or("locked".to_string(), |t| format!("unlocked @ {t:.1}s"));
        println!(
            "{:<20} x{:<4} {:<28} {:<32} {}",
            u.title_label(),
            u.count_label(),
            u.cost_label(),
            u.upgrade_label(),
            unlocked
        );
    }
    println!("actions: {}  spent: {:.2}", report.actions, report.total_spent);
    Ok(())
}
