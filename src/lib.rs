/*!
`idle_economy` — an idle-clicker economy engine plus the tools to pace it.

What it does
- Owns a currency balance, a derived currency-per-second rate and a fixed
  roster of buildings ([`Economy`]).
- Accrues currency over time (`tick`), buys and upgrades buildings along
  exponential cost curves, and unlocks buildings the first time the balance
  reaches their base cost.
- Optionally (`system-*` features) drives the engine with a buy policy to
  measure pacing, and closes the loop over a global cost scale with
  [`refine_det`].

How to use (call surface only)
- Build definitions with [`EconomyConfig`] (defaults, or JSON).
- `Economy::new(config)?`, then per frame `economy.tick(dt)`.
- `economy.purchase(i)? / economy.upgrade(i)?` return `false` when the player
  cannot afford it.
- Read `economy.view()` after each mutation to refresh the presentation layer.

What it does NOT do
- No rendering, input or persistence. The host owns those.
*/

pub mod config;
pub mod economy;
pub mod error;
pub mod mechanics;
pub mod systems;

pub use config::EconomyConfig;
pub use economy::{Economy, EconomyView, ProductionUnit, UnitDef, UnitView};
pub use error::EconomyError;

/// Result of a closed-loop refinement run.
#[derive(Clone, Debug)]
pub struct Outcome<TParams, Obs> {
    pub theta: TParams,
    pub obs: Obs,
    pub iters: usize,
    pub converged: bool,
}

/// Deterministic refinement: θ_{t+1} = update(θ_t, measure(simulate(θ_t))).
///
/// Stops early when `converged(θ_t, θ_{t+1})` holds and returns θ_{t+1}.
pub fn refine_det<P, D, M, Sim, Meas, Upd, Conv>(
    mut theta: P,
    mut simulate: Sim,
    mut measure: Meas,
    mut update: Upd,
    mut converged: Conv,
    max_iters: usize,
) -> P
where
    Sim: FnMut(&P) -> D,
    Meas: FnMut(&D) -> M,
    Upd: FnMut(&P, &M) -> P,
    Conv: FnMut(&P, &P) -> bool,
{
    for _ in 0..max_iters {
        let data = simulate(&theta);
        let pi = measure(&data);
        let theta_next = update(&theta, &pi);
        if converged(&theta, &theta_next) {
            return theta_next;
        }
        theta = theta_next;
    }
    theta
}
