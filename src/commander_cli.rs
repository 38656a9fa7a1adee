use std::io::{self, Write};

use crate::area::AreaBounds;
use crate::commander::Commander;
use crate::commander_greedy::greedy_choice;
use crate::common::{Choice, RoundOutcome, RoundReport, SearchOutcome};
use crate::config::LAST_KNOWN_POSITION;
use crate::game::SessionEnd;
use crate::session::SearchSession;

// Console chart geometry: the map slice holding all three areas and the
// last known position, at 4 map pixels per column and 10 per row.
const CHART_LEFT: usize = 60;
const CHART_TOP: usize = 190;
const CHART_COLS: usize = 36;
const CHART_ROWS: usize = 14;
const PX_PER_COL: usize = 4;
const PX_PER_ROW: usize = 10;

type Canvas = [[char; CHART_COLS]; CHART_ROWS];

/// Interactive commander: draws the chart, prints the menu, and reads
/// choices from stdin. In auto mode it answers its own prompts with the
/// suggested choice instead, which drives the scripted demo.
pub struct CliCommander {
    auto: bool,
}

impl CliCommander {
    pub fn new() -> Self {
        Self { auto: false }
    }

    /// Commander that narrates the session but accepts every suggestion.
    pub fn auto() -> Self {
        Self { auto: true }
    }
}

fn plot(canvas: &mut Canvas, map: (usize, usize), ch: char) {
    if map.0 < CHART_LEFT || map.1 < CHART_TOP {
        return;
    }
    let col = (map.0 - CHART_LEFT) / PX_PER_COL;
    let row = (map.1 - CHART_TOP) / PX_PER_ROW;
    if col < CHART_COLS && row < CHART_ROWS {
        canvas[row][col] = ch;
    }
}

fn draw_rect(canvas: &mut Canvas, bounds: &AreaBounds) {
    let c0 = bounds.left().saturating_sub(CHART_LEFT) / PX_PER_COL;
    let r0 = bounds.top().saturating_sub(CHART_TOP) / PX_PER_ROW;
    let c1 = (bounds.right().saturating_sub(CHART_LEFT) / PX_PER_COL).min(CHART_COLS - 1);
    let r1 = (bounds.bottom().saturating_sub(CHART_TOP) / PX_PER_ROW).min(CHART_ROWS - 1);
    for c in c0..=c1 {
        canvas[r0][c] = '─';
        canvas[r1][c] = '─';
    }
    for r in r0..=r1 {
        canvas[r][c0] = '│';
        canvas[r][c1] = '│';
    }
    canvas[r0][c0] = '┌';
    canvas[r0][c1] = '┐';
    canvas[r1][c0] = '└';
    canvas[r1][c1] = '┘';
}

/// Print the search chart: the three numbered areas, '+' at the last known
/// position, and with `reveal_target` a '*' where the sailor actually is.
pub fn print_chart(session: &SearchSession, reveal_target: bool) {
    let mut canvas: Canvas = [[' '; CHART_COLS]; CHART_ROWS];
    for area in session.areas() {
        draw_rect(&mut canvas, area.bounds());
    }
    for area in session.areas() {
        let label = (b'0' + area.id().number()) as char;
        let at = (
            area.bounds().left() + PX_PER_COL,
            area.bounds().top() + 15,
        );
        plot(&mut canvas, at, label);
    }
    plot(&mut canvas, LAST_KNOWN_POSITION, '+');
    if reveal_target {
        let target = session.target();
        let bounds = session.area(target.area()).bounds();
        plot(&mut canvas, bounds.to_map(target.cell()), '*');
    }
    println!();
    for row in canvas.iter() {
        let line: String = row.iter().collect();
        println!("{}", line.trim_end());
    }
    println!("0{} 50 Nautical Miles", "-".repeat(12));
    println!("+ = Last Known Position");
    println!("* = Actual Position");
}

/// Print the current priors in chart order.
pub fn print_priors(session: &SearchSession) {
    let [p1, p2, p3] = session.priors();
    println!("P1 = {:.3}, P2 = {:.3}, P3 = {:.3}", p1, p2, p3);
}

/// Print the current effectiveness values in chart order.
pub fn print_effectiveness(session: &SearchSession) {
    let [e1, e2, e3] = session.effectiveness();
    println!("E1 = {:.3}, E2 = {:.3}, E3 = {:.3}", e1, e2, e3);
}

fn print_menu(search_num: u32) {
    println!("\nSearch {}", search_num);
    println!("\nChoose next areas to search:\n");
    println!("0 - Quit");
    println!("1 - Send both search teams to Area 1");
    println!("2 - Send both search teams to Area 2");
    println!("3 - Send both search teams to Area 3");
    println!("4 - Search Areas 1 & 2");
    println!("5 - Search Areas 1 & 3");
    println!("6 - Search Areas 2 & 3");
    println!("7 - Start Over");
}

impl Commander for CliCommander {
    fn choose(&mut self, session: &SearchSession) -> Choice {
        let suggested = greedy_choice(session);
        print_menu(session.rounds_completed() + 1);
        if self.auto {
            println!("Choice [{}]: {}", suggested.digit(), suggested.digit());
            return suggested;
        }
        loop {
            print!("Choice [{}]: ", suggested.digit());
            io::stdout().flush().unwrap();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).unwrap() == 0 {
                // Closed stdin ends the operation.
                return Choice::Quit;
            }
            let line = line.trim();
            if line.is_empty() {
                return suggested;
            }
            match Choice::parse(line) {
                Some(choice) => return choice,
                None => eprintln!("\nSorry, but that isn't a valid choice."),
            }
        }
    }

    fn session_started(&mut self, session: &SearchSession) {
        println!("{}", "#".repeat(66));
        println!("{} NEW GAME {}", "-".repeat(28), "-".repeat(28));
        println!("{}", "#".repeat(66));
        print_chart(session, false);
        println!("\nInitial Target (P) Probabilities:");
        print_priors(session);
    }

    fn round_resolved(&mut self, session: &SearchSession, report: &RoundReport) {
        // On an empty round the completed counter has already advanced.
        let search_num = match report.outcome {
            RoundOutcome::NotFound => session.rounds_completed(),
            RoundOutcome::Found { .. } => session.rounds_completed() + 1,
        };
        println!("\nSearch {} Effectiveness (E):", search_num);
        print_effectiveness(session);
        println!();
        for (team_num, team) in report.teams.iter().enumerate() {
            match team.outcome {
                SearchOutcome::Found => println!(
                    "Search {} Results {} = Found in {}",
                    search_num,
                    team_num + 1,
                    team.area
                ),
                SearchOutcome::NotFound => {
                    println!("Search {} Results {} = Not Found", search_num, team_num + 1)
                }
            }
        }
        println!("{}", "#".repeat(65));
    }

    fn beliefs_revised(&mut self, session: &SearchSession) {
        println!(
            "\nNew Target Probabilities (P) for Search {}:",
            session.rounds_completed() + 1
        );
        print_priors(session);
    }

    fn session_ended(&mut self, session: &SearchSession, end: &SessionEnd) {
        match end {
            SessionEnd::Found { area, rounds } => {
                let target = session.target();
                let (x, y) = session.area(target.area()).bounds().to_map(target.cell());
                println!(
                    "\nThe sailor was recovered in {} at map position ({}, {}) on search {}.",
                    area, x, y, rounds
                );
                print_chart(session, true);
            }
            SessionEnd::Exhausted { rounds } => {
                println!(
                    "\nThe sailor could not be recovered before a hurricane forced the search to end."
                );
                println!("You made {} searches before the hurricane arrived.", rounds);
                print_chart(session, true);
            }
            SessionEnd::Restarted | SessionEnd::Quit => {}
        }
    }
}
