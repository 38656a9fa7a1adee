use mayday::{
    Choice, Commander, GameLoop, GreedyCommander, RoundReport, SearchSession, SessionEnd,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Commander that replays a fixed list of choices.
struct ScriptedCommander {
    script: Vec<Choice>,
    next: usize,
    sessions_started: u32,
    rounds_seen: u32,
}

impl ScriptedCommander {
    fn new(script: Vec<Choice>) -> Self {
        Self {
            script,
            next: 0,
            sessions_started: 0,
            rounds_seen: 0,
        }
    }
}

impl Commander for ScriptedCommander {
    fn choose(&mut self, _session: &SearchSession) -> Choice {
        let choice = self.script[self.next];
        self.next += 1;
        choice
    }

    fn session_started(&mut self, _session: &SearchSession) {
        self.sessions_started += 1;
    }

    fn round_resolved(&mut self, _session: &SearchSession, _report: &RoundReport) {
        self.rounds_seen += 1;
    }
}

#[test]
fn test_quit_ends_run() {
    let rng = SmallRng::seed_from_u64(1);
    let mut game = GameLoop::new(ScriptedCommander::new(vec![Choice::Quit]), rng);
    game.run().unwrap();
    assert_eq!(game.commander().sessions_started, 1);
    assert_eq!(game.commander().rounds_seen, 0);
}

#[test]
fn test_restart_begins_new_session() {
    let rng = SmallRng::seed_from_u64(2);
    let mut game = GameLoop::new(
        ScriptedCommander::new(vec![Choice::Restart, Choice::Quit]),
        rng,
    );
    game.run().unwrap();
    assert_eq!(game.commander().sessions_started, 2);
    assert_eq!(game.commander().rounds_seen, 0);
}

#[test]
fn test_play_session_reports_restart() {
    let rng = SmallRng::seed_from_u64(3);
    let mut game = GameLoop::new(ScriptedCommander::new(vec![Choice::Restart]), rng);
    let end = game.play_session().unwrap();
    assert_eq!(end, SessionEnd::Restarted);
}

#[test]
fn test_greedy_sessions_end_within_limits() {
    let rng = SmallRng::seed_from_u64(4);
    let mut game = GameLoop::new(GreedyCommander::new(), rng);
    for _ in 0..50 {
        match game.play_session().unwrap() {
            SessionEnd::Found { rounds, .. } => assert!((1..=8).contains(&rounds)),
            SessionEnd::Exhausted { rounds } => assert!((3..=8).contains(&rounds)),
            end => panic!("unexpected session end: {:?}", end),
        }
    }
}

#[test]
fn test_greedy_recovers_most_sailors() {
    let rng = SmallRng::seed_from_u64(5);
    let mut game = GameLoop::new(GreedyCommander::new(), rng);
    let mut found = 0;
    for _ in 0..100 {
        if matches!(game.play_session().unwrap(), SessionEnd::Found { .. }) {
            found += 1;
        }
    }
    // belief-following search recovers well over half; 40 leaves a wide margin
    assert!(found >= 40, "only {} of 100 sessions found the sailor", found);
}
