use crate::commander::Commander;
use crate::common::Choice;
use crate::session::SearchSession;

/// The choice a belief-following commander makes: both teams on the area
/// with the highest current probability.
pub fn greedy_choice(session: &SearchSession) -> Choice {
    let mut best = 0;
    for (i, p) in session.priors().iter().enumerate() {
        if *p > session.priors()[best] {
            best = i;
        }
    }
    match best {
        0 => Choice::Area1Twice,
        1 => Choice::Area2Twice,
        _ => Choice::Area3Twice,
    }
}

/// Silent commander that always doubles down on the most probable area.
pub struct GreedyCommander;

impl GreedyCommander {
    pub fn new() -> Self {
        Self
    }
}

impl Commander for GreedyCommander {
    fn choose(&mut self, session: &SearchSession) -> Choice {
        greedy_choice(session)
    }
}
