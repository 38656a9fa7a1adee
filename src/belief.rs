//! Bayesian belief revision over the search areas.

use log::debug;

use crate::common::EngineError;
use crate::config::NUM_AREAS;

/// Revise the area priors after a round in which no team found the target.
///
/// Each area's posterior mass is its prior scaled by `1 − e`, the
/// probability the round's searches there would have missed a target
/// actually present; the masses are then renormalized. Unsearched areas
/// carry `e = 0` and keep their relative mass; an area swept at `e = 1`
/// is eliminated exactly.
///
/// A zero denominator would mean every area holding probability mass was
/// fully swept and the target was still not found, which the hit test
/// cannot produce; it is reported as `BeliefCollapse` rather than treated
/// as a numeric condition.
pub fn revise_priors(
    priors: [f64; NUM_AREAS],
    effectiveness: [f64; NUM_AREAS],
) -> Result<[f64; NUM_AREAS], EngineError> {
    let mut masses = [0.0; NUM_AREAS];
    for i in 0..NUM_AREAS {
        masses[i] = priors[i] * (1.0 - effectiveness[i]);
    }
    let denom: f64 = masses.iter().sum();
    if denom == 0.0 {
        return Err(EngineError::BeliefCollapse);
    }
    for mass in masses.iter_mut() {
        *mass /= denom;
    }
    debug!("revised priors: {:?}", masses);
    Ok(masses)
}
