//! Cost tuning: rescale every price in a roster until the last building
//! unlocks at a target session time.
//!
//! θ is a single global `cost_scale`; π is the time the last unit unlocked
//! under the [`Payback`] policy (the session length when it never does).
//! Prices and the starting purse scale together, so unlock times grow roughly
//! linearly with θ and a gentle proportional step settles in a few passes.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::config::EconomyConfig;
use crate::economy::Economy;
use crate::error::EconomyError;
use crate::mechanics::control;
use crate::systems::autoplay::{Payback, SessionConfig, run_session};
use crate::{Outcome, refine_det};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub cost_scale: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self { cost_scale: 1.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Targets {
    pub all_unlocked_secs: f64,
    /// Relative acceptance band around the target.
    pub tolerance: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub scale_min: f64,
    pub scale_max: f64,
}
impl Bounds {
    pub fn soft() -> Self {
        Self { scale_min: 1e-3, scale_max: 1e3 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Gains {
    pub k_scale: f64,
    /// Largest multiplicative move of the nominal target per pass.
    pub max_step: f64,
}
impl Default for Gains {
    fn default() -> Self {
        Self { k_scale: 0.6, max_step: 4.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Obs {
    pub all_unlocked_secs: f64,
    pub unlocked: usize,
}

fn within_band(o: &Obs, tgt: &Targets) -> bool {
    (o.all_unlocked_secs - tgt.all_unlocked_secs).abs() <= tgt.tolerance * tgt.all_unlocked_secs.max(1.0)
}

pub fn tune_cost_scale(
    base: &EconomyConfig,
    tgt: Targets,
    session: SessionConfig,
    b: Bounds,
    g: Gains,
    max_iters: usize,
) -> Result<Outcome<Params, Obs>, EconomyError> {
    base.validate()?;

    let obs = Rc::new(RefCell::new(Obs::default()));
    let iters = Rc::new(RefCell::new(0usize));
    let done = Rc::new(RefCell::new(false));
    let failure: Rc<RefCell<Option<EconomyError>>> = Rc::new(RefCell::new(None));

    let simulate = {
        let failure = Rc::clone(&failure);
        move |th: &Params| -> Option<Obs> {
            let mut eco = match Economy::new(base.with_cost_scale(th.cost_scale)) {
                Ok(eco) => eco,
                Err(e) => {
                    *failure.borrow_mut() = Some(e);
                    return None;
                }
            };
            match run_session(&mut eco, &mut Payback, &session) {
                Ok(r) => Some(Obs {
                    all_unlocked_secs: r.all_unlocked_at().unwrap_or(r.elapsed_secs),
                    unlocked: r.unlocked_count(),
                }),
                Err(e) => {
                    *failure.borrow_mut() = Some(e);
                    None
                }
            }
        }
    };

    let measure = {
        let obs = Rc::clone(&obs);
        move |d: &Option<Obs>| {
            if let Some(o) = d {
                *obs.borrow_mut() = *o;
            }
        }
    };

    let update = {
        let obs = Rc::clone(&obs);
        move |th: &Params, _m: &()| -> Params {
            let o = *obs.borrow();
            if within_band(&o, &tgt) {
                return *th;
            }
            let nominal = control::ratio_target(th.cost_scale, tgt.all_unlocked_secs, o.all_unlocked_secs, g.max_step);
            let cost_scale = control::approach(
                th.cost_scale,
                nominal.clamp(b.scale_min, b.scale_max),
                g.k_scale,
                b.scale_min,
                b.scale_max,
            );
            debug!(
                "cost tuning: scale {:.4} -> {:.4} (last unlock {:.1}s, target {:.1}s)",
                th.cost_scale, cost_scale, o.all_unlocked_secs, tgt.all_unlocked_secs
            );
            Params { cost_scale }
        }
    };

    let converged = {
        let obs = Rc::clone(&obs);
        let iters = Rc::clone(&iters);
        let done = Rc::clone(&done);
        let failure = Rc::clone(&failure);
        move |_a: &Params, _b: &Params| -> bool {
            *iters.borrow_mut() += 1;
            if failure.borrow().is_some() {
                return true;
            }
            let ok = within_band(&obs.borrow(), &tgt);
            if ok {
                *done.borrow_mut() = true;
            }
            ok
        }
    };

    let theta = refine_det(Params::default(), simulate, measure, update, converged, max_iters);

    if let Some(e) = failure.borrow_mut().take() {
        return Err(e);
    }
    let out = Outcome {
        theta,
        obs: *obs.borrow(),
        iters: *iters.borrow(),
        converged: *done.borrow(),
    };
    Ok(out)
}

/// Tune with soft bounds, default gains and the default session.
pub fn tune_quick(base: &EconomyConfig, all_unlocked_secs: f64) -> Result<Outcome<Params, Obs>, EconomyError> {
    tune_cost_scale(
        base,
        Targets { all_unlocked_secs, tolerance: 0.05 },
        SessionConfig::default(),
        Bounds::soft(),
        Gains::default(),
        64,
    )
}
