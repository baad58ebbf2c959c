//! Autoplay: drive an [`Economy`] with a buy policy over a fixed-step session
//! and report the pacing a player would see.
//!
//! Each step accrues `dt` seconds of production, then lets the policy act until
//! it passes, an action is refused, or `max_actions_per_tick` is reached (the
//! cap keeps free purchases from spinning forever).
//! Unlock times are sampled at step granularity.

use bevy_prng::WyRand;
use log::debug;

use crate::economy::Economy;
use crate::error::EconomyError;
use crate::mechanics::{cost, stoch};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Purchase(usize),
    Upgrade(usize),
}

/// An action the player could take right now, with its price and the CpS it adds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub action: Action,
    pub cost: f64,
    pub gain: f64,
}

impl Candidate {
    /// Seconds of the added production needed to pay the price back.
    pub fn payback_secs(&self) -> f64 {
        if self.gain > 0.0 { self.cost / self.gain } else { f64::INFINITY }
    }
}

/// Every purchase on an unlocked unit, plus upgrades on units owned at least once.
pub fn candidates(eco: &Economy) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(eco.len() * 2);
    for (i, u) in eco.units().iter().enumerate().filter(|(_, u)| u.unlocked()) {
        out.push(Candidate {
            action: Action::Purchase(i),
            cost: u.purchase_cost(),
            gain: u.base_rate() * (f64::from(u.upgrade_level()) + 1.0),
        });
        if u.count() > 0 {
            out.push(Candidate {
                action: Action::Upgrade(i),
                cost: u.upgrade_cost(),
                gain: f64::from(u.count()) * u.base_rate(),
            });
        }
    }
    out
}

pub trait BuyPolicy {
    /// Next action to attempt, or `None` to keep saving this step.
    fn choose(&mut self, eco: &Economy) -> Option<Action>;
}

/// Never buys. Baseline for pure accrual.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idle;

impl BuyPolicy for Idle {
    fn choose(&mut self, _eco: &Economy) -> Option<Action> {
        None
    }
}

/// Buys the cheapest affordable action, never saves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl BuyPolicy for Greedy {
    fn choose(&mut self, eco: &Economy) -> Option<Action> {
        candidates(eco)
            .into_iter()
            .filter(|c| cost::affordable(eco.currency(), c.cost))
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
            .map(|c| c.action)
    }
}

/// Targets the action with the shortest payback and saves for it when short.
///
/// Saving lets the balance climb to the next base cost; [`Greedy`] keeps it
/// pinned under the cheapest price and unlocks late buildings much later.
#[derive(Clone, Copy, Debug, Default)]
pub struct Payback;

impl BuyPolicy for Payback {
    fn choose(&mut self, eco: &Economy) -> Option<Action> {
        let best = candidates(eco)
            .into_iter()
            .filter(|c| c.gain > 0.0)
            .min_by(|a, b| a.payback_secs().total_cmp(&b.payback_secs()))?;
        cost::affordable(eco.currency(), best.cost).then_some(best.action)
    }
}

/// With probability `buy_chance` per decision, picks uniformly among
/// affordable actions. Deterministic per seed.
#[derive(Clone, Debug)]
pub struct RandomPick {
    rng: WyRand,
    buy_chance: f64,
}

impl RandomPick {
    pub fn new(seed: u64, buy_chance: f64) -> Self {
        Self { rng: stoch::seeded(seed), buy_chance }
    }
}

impl BuyPolicy for RandomPick {
    fn choose(&mut self, eco: &Economy) -> Option<Action> {
        if !stoch::bernoulli(&mut self.rng, self.buy_chance) {
            return None;
        }
        let affordable: Vec<Candidate> = candidates(eco)
            .into_iter()
            .filter(|c| cost::affordable(eco.currency(), c.cost))
            .collect();
        let i = stoch::pick_index(&mut self.rng, affordable.len())?;
        Some(affordable[i].action)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub duration_secs: f64,
    pub dt: f64,
    pub max_actions_per_tick: usize,
}

impl SessionConfig {
    /// `duration_secs` finite and non-negative, `dt` finite and positive.
    pub fn validate(&self) -> Result<(), EconomyError> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(EconomyError::InvalidSession(format!(
                "duration_secs must be finite and non-negative, got {}",
                self.duration_secs
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(EconomyError::InvalidSession(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { duration_secs: 3_600.0, dt: 0.25, max_actions_per_tick: 64 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub elapsed_secs: f64,
    /// Per unit: session time of unlock (0 for units unlocked before the first step).
    pub unlock_times: Vec<Option<f64>>,
    pub counts: Vec<u32>,
    pub levels: Vec<u32>,
    pub actions: usize,
    pub total_spent: f64,
    pub final_currency: f64,
    pub final_rate: f64,
}

impl SessionReport {
    /// Time the last unit unlocked, if all of them did.
    pub fn all_unlocked_at(&self) -> Option<f64> {
        self.unlock_times
            .iter()
            .try_fold(0.0_f64, |acc, t| t.map(|t| acc.max(t)))
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlock_times.iter().filter(|t| t.is_some()).count()
    }
}

/// Apply one action; `Ok(false)` when the economy refused it.
pub fn apply(eco: &mut Economy, action: Action) -> Result<bool, EconomyError> {
    match action {
        Action::Purchase(i) => eco.purchase(i),
        Action::Upgrade(i) => eco.upgrade(i),
    }
}

pub fn run_session(
    eco: &mut Economy,
    policy: &mut dyn BuyPolicy,
    cfg: &SessionConfig,
) -> Result<SessionReport, EconomyError> {
    cfg.validate()?;
    let dt = cfg.dt;
    let steps = (cfg.duration_secs / dt).ceil() as usize;

    let mut unlock_times: Vec<Option<f64>> = eco
        .units()
        .iter()
        .map(|u| u.unlocked().then_some(0.0))
        .collect();
    let mut actions = 0usize;
    let mut total_spent = 0.0;
    let mut elapsed = 0.0;

    for step in 0..steps {
        elapsed = (step + 1) as f64 * dt;
        eco.tick(dt);
        record_unlocks(eco, &mut unlock_times, elapsed);

        for _ in 0..cfg.max_actions_per_tick {
            let Some(action) = policy.choose(eco) else { break };
            let before = eco.currency();
            if !apply(eco, action)? {
                break;
            }
            total_spent += before - eco.currency();
            actions += 1;
        }
    }

    let report = SessionReport {
        elapsed_secs: elapsed,
        unlock_times,
        counts: eco.units().iter().map(|u| u.count()).collect(),
        levels: eco.units().iter().map(|u| u.upgrade_level()).collect(),
        actions,
        total_spent,
        final_currency: eco.currency(),
        final_rate: eco.production_rate(),
    };
    debug!(
        "session {:.0}s: {} actions, {}/{} unlocked, CpS {:.2}",
        report.elapsed_secs,
        report.actions,
        report.unlocked_count(),
        report.unlock_times.len(),
        report.final_rate
    );
    Ok(report)
}

fn record_unlocks(eco: &Economy, times: &mut [Option<f64>], now: f64) {
    for (t, u) in times.iter_mut().zip(eco.units()) {
        if t.is_none() && u.unlocked() {
            *t = Some(now);
        }
    }
}
