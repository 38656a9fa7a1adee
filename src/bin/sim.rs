use mayday::{GameLoop, GreedyCommander, SessionEnd};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;

    let rng = SmallRng::seed_from_u64(seed);
    let mut game = GameLoop::new(GreedyCommander::new(), rng);

    let mut found = 0u32;
    let mut exhausted = 0u32;
    let mut rounds_to_find = 0u64;
    for _ in 0..games {
        match game.play_session().map_err(|e| anyhow::anyhow!(e))? {
            SessionEnd::Found { rounds, .. } => {
                found += 1;
                rounds_to_find += u64::from(rounds);
            }
            SessionEnd::Exhausted { .. } => exhausted += 1,
            // The greedy commander never quits or restarts.
            _ => {}
        }
    }

    let mean_rounds_to_find = if found > 0 {
        Some(rounds_to_find as f64 / f64::from(found))
    } else {
        None
    };
    let result = json!({
        "games": games,
        "found": found,
        "exhausted": exhausted,
        "find_rate": f64::from(found) / f64::from(games),
        "mean_rounds_to_find": mean_rounds_to_find,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
