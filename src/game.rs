//! The round-based state machine driving sessions to a verdict.

use log::info;
use rand::rngs::SmallRng;

use crate::area::AreaId;
use crate::commander::Commander;
use crate::common::{Choice, EngineError, RoundOutcome};
use crate::session::SearchSession;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The sailor was recovered; `rounds` is the search that did it.
    Found { area: AreaId, rounds: u32 },
    /// The hurricane arrived after `rounds` empty-handed searches.
    Exhausted { rounds: u32 },
    /// The commander abandoned the session for a fresh one.
    Restarted,
    /// The commander ended the operation.
    Quit,
}

/// Owns the RNG and a commander and cycles search sessions: sample sea
/// state, take a choice, resolve the sweeps, revise beliefs, until a find,
/// the hurricane, or an explicit quit.
pub struct GameLoop<C: Commander> {
    commander: C,
    rng: SmallRng,
}

impl<C: Commander> GameLoop<C> {
    pub fn new(commander: C, rng: SmallRng) -> Self {
        Self { commander, rng }
    }

    /// The commander, for inspection after a run.
    pub fn commander(&self) -> &C {
        &self.commander
    }

    /// Play sessions until the commander quits. Found and exhausted
    /// sessions, like restarts, roll straight into a fresh one.
    pub fn run(&mut self) -> Result<(), EngineError> {
        loop {
            if matches!(self.play_session()?, SessionEnd::Quit) {
                return Ok(());
            }
        }
    }

    /// Play a single session from a fresh state to its verdict.
    pub fn play_session(&mut self) -> Result<SessionEnd, EngineError> {
        let mut session = SearchSession::new(&mut self.rng)?;
        self.commander.session_started(&session);
        loop {
            session.sample_round_effectiveness(&mut self.rng);
            let choice = self.commander.choose(&session);
            match choice {
                Choice::Quit => {
                    let end = SessionEnd::Quit;
                    self.commander.session_ended(&session, &end);
                    return Ok(end);
                }
                Choice::Restart => {
                    let end = SessionEnd::Restarted;
                    self.commander.session_ended(&session, &end);
                    return Ok(end);
                }
                _ => {}
            }
            let report = session.resolve_choice(&mut self.rng, choice)?;
            self.commander.round_resolved(&session, &report);
            match report.outcome {
                RoundOutcome::Found { area } => {
                    let rounds = session.rounds_completed() + 1;
                    info!("target found in {} on search {}", area, rounds);
                    let end = SessionEnd::Found { area, rounds };
                    self.commander.session_ended(&session, &end);
                    return Ok(end);
                }
                RoundOutcome::NotFound => {
                    if session.limit_reached() {
                        let rounds = session.rounds_completed();
                        info!("hurricane arrived after {} searches", rounds);
                        let end = SessionEnd::Exhausted { rounds };
                        self.commander.session_ended(&session, &end);
                        return Ok(end);
                    }
                    session.revise_beliefs()?;
                    self.commander.beliefs_revised(&session);
                }
            }
        }
    }
}
