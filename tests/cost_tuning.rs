// tests/cost_tuning.rs
#![cfg(feature = "system-cost_tuning")]

use idle_economy::EconomyConfig;
use idle_economy::systems::autoplay::SessionConfig;
use idle_economy::systems::cost_tuning::{Bounds, Gains, Targets, tune_cost_scale, tune_quick};

fn base() -> EconomyConfig {
    EconomyConfig { starting_currency: 15.0, ..EconomyConfig::default() }
}

#[test]
fn scale_converges_to_target_unlock_time() {
    let tgt = Targets { all_unlocked_secs: 1_000.0, tolerance: 0.05 };
    let out = tune_cost_scale(&base(), tgt, SessionConfig::default(), Bounds::soft(), Gains::default(), 64).unwrap();

    assert!(out.converged, "did not converge: {:?} after {} iters", out.obs, out.iters);
    assert!(
        (out.obs.all_unlocked_secs - 1_000.0).abs() <= 50.0,
        "last unlock off target: {:?}",
        out.obs
    );
    assert_eq!(out.obs.unlocked, 4);
    // Default prices need about twice that long, so they must get cheaper.
    assert!(out.theta.cost_scale < 1.0 && out.theta.cost_scale > 0.3, "{:?}", out.theta);
}

#[test]
fn scale_grows_when_pacing_is_too_fast() {
    let out = tune_quick(&base(), 3_000.0).unwrap();
    assert!(out.converged, "{:?}", out.obs);
    assert!(out.theta.cost_scale > 1.0, "{:?}", out.theta);
}

#[test]
fn bounds_hold_when_target_is_unreachable() {
    let tgt = Targets { all_unlocked_secs: 1e7, tolerance: 0.01 };
    let b = Bounds { scale_min: 0.5, scale_max: 2.0 };
    let out = tune_cost_scale(&base(), tgt, SessionConfig::default(), b, Gains::default(), 12).unwrap();

    assert!(!out.converged);
    assert_eq!(out.iters, 12);
    assert!(out.theta.cost_scale <= 2.0 && out.theta.cost_scale >= 0.5);
}

#[test]
fn invalid_roster_is_reported_before_tuning() {
    let bad = EconomyConfig { units: Vec::new(), ..EconomyConfig::default() };
    assert!(tune_quick(&bad, 600.0).is_err());
}
