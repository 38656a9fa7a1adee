//! The decision seam between the engine and whoever directs the teams.

use crate::common::{Choice, RoundReport};
use crate::game::SessionEnd;
use crate::session::SearchSession;

/// Interface implemented by the different commanders.
///
/// `choose` picks each round's action; the remaining hooks let interactive
/// implementations narrate the session and default to no-ops.
pub trait Commander {
    /// Pick the next action from the menu of choices.
    fn choose(&mut self, session: &SearchSession) -> Choice;

    /// A fresh session has begun.
    fn session_started(&mut self, _session: &SearchSession) {}

    /// A search round resolved; the report carries both teams' sweeps.
    fn round_resolved(&mut self, _session: &SearchSession, _report: &RoundReport) {}

    /// Beliefs were revised after an empty-handed round.
    fn beliefs_revised(&mut self, _session: &SearchSession) {}

    /// The session reached a verdict.
    fn session_ended(&mut self, _session: &SearchSession, _end: &SessionEnd) {}
}
