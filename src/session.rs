//! The owned state of one search-and-rescue operation.

use log::debug;
use rand::Rng;

use crate::area::{AreaId, SearchArea, TargetLocation};
use crate::belief;
use crate::common::{
    Choice, EngineError, RoundOutcome, RoundReport, SearchOutcome, SearchPlan, TeamReport,
};
use crate::config::{
    AREAS, EFFECTIVENESS_BAND, INITIAL_PRIORS, NUM_AREAS, PRIOR_SUM_TOLERANCE, ROUND_LIMIT_BAND,
};
use crate::search;

/// Mutable game state for a single operation: the three charted areas, the
/// sailor's true location, and the hurricane clock. Owned exclusively by
/// the game loop; no other component keeps references across rounds.
#[derive(Debug)]
pub struct SearchSession {
    areas: [SearchArea; NUM_AREAS],
    target: TargetLocation,
    rounds_completed: u32,
    round_limit: u32,
}

impl SearchSession {
    /// Start a session with the charted priors.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, EngineError> {
        Self::with_priors(rng, INITIAL_PRIORS)
    }

    /// Start a session with caller-supplied priors, which must sum to 1.
    ///
    /// Hides the target (area drawn by the priors, cell uniform within the
    /// area's extent) and draws the hurricane arrival once.
    pub fn with_priors<R: Rng + ?Sized>(
        rng: &mut R,
        priors: [f64; NUM_AREAS],
    ) -> Result<Self, EngineError> {
        let sum: f64 = priors.iter().sum();
        if (sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(EngineError::PriorsNotNormalized { sum });
        }
        let areas: [SearchArea; NUM_AREAS] =
            core::array::from_fn(|i| SearchArea::new(AreaId::new(i as u8 + 1), AREAS[i], priors[i]));
        let target = place_target(rng, &areas);
        let round_limit = rng.random_range(ROUND_LIMIT_BAND.0..ROUND_LIMIT_BAND.1) as u32;
        debug!("target hidden in {}, hurricane in {} rounds", target.area(), round_limit);
        Ok(Self {
            areas,
            target,
            rounds_completed: 0,
            round_limit,
        })
    }

    /// Draw each area's effectiveness for the coming round from the
    /// sea-state band. Runs before the commander commits the teams.
    pub fn sample_round_effectiveness<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for area in self.areas.iter_mut() {
            area.set_effectiveness(rng.random_range(EFFECTIVENESS_BAND.0..EFFECTIVENESS_BAND.1));
        }
    }

    /// Run both teams' sweeps for a search choice and settle the round.
    ///
    /// Control choices (quit, restart) are the loop's to interpret and are
    /// rejected here without touching any state. A double-team choice
    /// replaces the area's sampled effectiveness with the observed union
    /// coverage; split-team choices keep the sampled values. Afterwards
    /// every area the plan did not touch has its effectiveness forced to
    /// zero so revision leaves those priors' relative mass alone. The
    /// completed-round counter advances only when the round comes up empty.
    pub fn resolve_choice<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        choice: Choice,
    ) -> Result<RoundReport, EngineError> {
        let plan = choice.plan().ok_or(EngineError::InvalidChoice)?;
        let [first_area, second_area] = plan.assignments();
        let first = self.sweep_team(rng, first_area)?;
        let second = self.sweep_team(rng, second_area)?;

        if let SearchPlan::DoubleTeam(area) = plan {
            let observed = search::observed_effectiveness(&first.coverage, &second.coverage);
            let overlap = (first.coverage & second.coverage).count_ones();
            debug!(
                "{}: observed coverage {:.3}, teams overlapped on {} cells",
                area, observed, overlap
            );
            self.area_mut(area).set_effectiveness(observed);
        }
        for area in self.areas.iter_mut() {
            if !plan.covers(area.id()) {
                area.set_effectiveness(0.0);
            }
        }

        let outcome = match (first.outcome, second.outcome) {
            (SearchOutcome::NotFound, SearchOutcome::NotFound) => RoundOutcome::NotFound,
            (SearchOutcome::Found, _) => RoundOutcome::Found { area: first.area },
            (_, SearchOutcome::Found) => RoundOutcome::Found { area: second.area },
        };
        if outcome == RoundOutcome::NotFound {
            self.rounds_completed += 1;
        }
        Ok(RoundReport {
            teams: [first, second],
            outcome,
        })
    }

    fn sweep_team<R: Rng + ?Sized>(&self, rng: &mut R, id: AreaId) -> Result<TeamReport, EngineError> {
        let area = self.area(id);
        let coverage = search::sweep(rng, area.bounds(), area.effectiveness())?;
        let outcome = search::resolve(id, &coverage, &self.target);
        Ok(TeamReport {
            area: id,
            outcome,
            coverage,
        })
    }

    /// Apply Bayes' rule to the priors using this round's effectiveness
    /// values. Only meaningful after a round that came up empty.
    pub fn revise_beliefs(&mut self) -> Result<(), EngineError> {
        let revised = belief::revise_priors(self.priors(), self.effectiveness())?;
        for (area, prior) in self.areas.iter_mut().zip(revised) {
            area.set_prior(prior);
        }
        Ok(())
    }

    /// The three search areas in chart order.
    pub fn areas(&self) -> &[SearchArea; NUM_AREAS] {
        &self.areas
    }

    /// Area state by id.
    pub fn area(&self, id: AreaId) -> &SearchArea {
        &self.areas[id.index()]
    }

    /// Mutable area state, for collaborators that rig scenarios.
    pub fn area_mut(&mut self, id: AreaId) -> &mut SearchArea {
        &mut self.areas[id.index()]
    }

    /// Current priors in chart order.
    pub fn priors(&self) -> [f64; NUM_AREAS] {
        core::array::from_fn(|i| self.areas[i].prior())
    }

    /// Current effectiveness values in chart order.
    pub fn effectiveness(&self) -> [f64; NUM_AREAS] {
        core::array::from_fn(|i| self.areas[i].effectiveness())
    }

    /// Rounds completed without a find.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Rounds allowed before the hurricane ends the operation.
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /// True once the hurricane clock has run out.
    pub fn limit_reached(&self) -> bool {
        self.rounds_completed >= self.round_limit
    }

    /// The sailor's actual location, for end-of-game disclosure.
    pub fn target(&self) -> TargetLocation {
        self.target
    }
}

/// Hide the target: the area is drawn by cumulative-threshold sampling over
/// the priors, the cell uniformly within that area's extent.
fn place_target<R: Rng + ?Sized>(rng: &mut R, areas: &[SearchArea; NUM_AREAS]) -> TargetLocation {
    let threshold: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    let mut id = areas[NUM_AREAS - 1].id();
    for area in areas.iter() {
        cumulative += area.prior();
        if threshold < cumulative {
            id = area.id();
            break;
        }
    }
    let bounds = areas[id.index()].bounds();
    let cell = (
        rng.random_range(0..bounds.width()),
        rng.random_range(0..bounds.height()),
    );
    TargetLocation::new(id, cell)
}
