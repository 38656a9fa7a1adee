//! Common types: round choices, team plans, outcomes, and engine errors.

use core::fmt;

use crate::area::AreaId;
use crate::grid::{CellGrid, GridError};

/// A menu action for the round: send the two teams out, or steer the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// End the operation.
    Quit,
    /// Send both search teams to Area 1.
    Area1Twice,
    /// Send both search teams to Area 2.
    Area2Twice,
    /// Send both search teams to Area 3.
    Area3Twice,
    /// Search Areas 1 & 2, one team each.
    Areas1And2,
    /// Search Areas 1 & 3, one team each.
    Areas1And3,
    /// Search Areas 2 & 3, one team each.
    Areas2And3,
    /// Abandon this session and start a fresh one.
    Restart,
}

impl Choice {
    /// Parse a menu entry ("0" through "7").
    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim() {
            "0" => Some(Choice::Quit),
            "1" => Some(Choice::Area1Twice),
            "2" => Some(Choice::Area2Twice),
            "3" => Some(Choice::Area3Twice),
            "4" => Some(Choice::Areas1And2),
            "5" => Some(Choice::Areas1And3),
            "6" => Some(Choice::Areas2And3),
            "7" => Some(Choice::Restart),
            _ => None,
        }
    }

    /// The menu digit for this choice.
    pub fn digit(&self) -> char {
        match self {
            Choice::Quit => '0',
            Choice::Area1Twice => '1',
            Choice::Area2Twice => '2',
            Choice::Area3Twice => '3',
            Choice::Areas1And2 => '4',
            Choice::Areas1And3 => '5',
            Choice::Areas2And3 => '6',
            Choice::Restart => '7',
        }
    }

    /// Team assignments implied by a search choice; `None` for the control
    /// choices (quit, restart), which carry no search work.
    pub fn plan(&self) -> Option<SearchPlan> {
        match self {
            Choice::Quit | Choice::Restart => None,
            Choice::Area1Twice => Some(SearchPlan::DoubleTeam(AreaId::new(1))),
            Choice::Area2Twice => Some(SearchPlan::DoubleTeam(AreaId::new(2))),
            Choice::Area3Twice => Some(SearchPlan::DoubleTeam(AreaId::new(3))),
            Choice::Areas1And2 => Some(SearchPlan::SplitTeams(AreaId::new(1), AreaId::new(2))),
            Choice::Areas1And3 => Some(SearchPlan::SplitTeams(AreaId::new(1), AreaId::new(3))),
            Choice::Areas2And3 => Some(SearchPlan::SplitTeams(AreaId::new(2), AreaId::new(3))),
        }
    }
}

/// Which areas the two search teams fly to this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlan {
    /// Both teams sweep the same area; its coverage is their union.
    DoubleTeam(AreaId),
    /// One team to each of two distinct areas.
    SplitTeams(AreaId, AreaId),
}

impl SearchPlan {
    /// Per-team area assignments, in team order.
    pub fn assignments(&self) -> [AreaId; 2] {
        match *self {
            SearchPlan::DoubleTeam(area) => [area, area],
            SearchPlan::SplitTeams(first, second) => [first, second],
        }
    }

    /// Whether this plan sends any team to `area`.
    pub fn covers(&self, area: AreaId) -> bool {
        self.assignments().contains(&area)
    }
}

/// Result of a single team's sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target's cell was inside the team's coverage.
    Found,
    /// The sweep came up empty.
    NotFound,
}

/// Combined result of a round: a find by either team, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Found { area: AreaId },
    NotFound,
}

/// One team's sweep of one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamReport {
    pub area: AreaId,
    pub outcome: SearchOutcome,
    pub coverage: CellGrid,
}

/// Everything a round produced: both teams' sweeps and the combined
/// outcome. Lives only until the round's termination check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub teams: [TeamReport; 2],
    pub outcome: RoundOutcome,
}

/// Errors surfaced by the search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Session construction was handed priors that do not sum to one.
    PriorsNotNormalized { sum: f64 },
    /// The choice carries no search work; control choices belong to the
    /// game loop, not the session.
    InvalidChoice,
    /// Belief revision hit a zero denominator after an empty-handed round,
    /// contradicting the engine's own hit test.
    BeliefCollapse,
    /// Underlying coverage-grid error.
    Grid(GridError),
}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        EngineError::Grid(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::PriorsNotNormalized { sum } => {
                write!(f, "Initial priors must sum to 1.0, got {}", sum)
            }
            EngineError::InvalidChoice => {
                write!(f, "Choice carries no search work for the session")
            }
            EngineError::BeliefCollapse => {
                write!(f, "Belief revision denominator is zero after a NotFound round")
            }
            EngineError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}
