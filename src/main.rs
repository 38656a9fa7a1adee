use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use mayday::{init_logging, CliCommander, GameLoop};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Run the interactive search-and-rescue game.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch one automated session that accepts every suggested choice.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let rng = make_rng(seed);
            let mut game = GameLoop::new(CliCommander::new(), rng);
            game.run().map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Demo { seed } => {
            let rng = make_rng(seed);
            let mut game = GameLoop::new(CliCommander::auto(), rng);
            game.play_session().map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}
