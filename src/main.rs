use std::io;
use std::process;
use std::time::Instant;

use clap::Parser;

use monopoly_odds::game::{DEFAULT_GAMES, DEFAULT_TURNS};
use monopoly_odds::logging::setup_logging;
use monopoly_odds::report::{write_header, write_results};
use monopoly_odds::simulation::{self, clock_seed, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "monopoly-odds", version, about)]
struct Config {
    /// Number of games to simulate
    #[arg(short = 'g', long, default_value_t = DEFAULT_GAMES)]
    games: u64,

    /// Number of moves per game
    #[arg(short = 'm', long, default_value_t = DEFAULT_TURNS)]
    moves: u32,

    /// Seed for the random number generator (defaults to the current time)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Number of worker threads (defaults to one per core)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Print the name of each space next to its count
    #[arg(long, default_value_t = false)]
    names: bool,
}

fn main() {
    let config = Config::parse();

    if let Err(e) = run(config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let _logger = setup_logging()?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut sim_config = SimulationConfig::new(config.games, config.moves, seed)?;
    if let Some(threads) = config.threads {
        sim_config = sim_config.with_threads(threads)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_header(&mut out, &sim_config)?;

    let start = Instant::now();
    let stats = simulation::run(&sim_config)?;
    log::info!("time elapsed: {:?}", start.elapsed());

    write_results(&mut out, &stats, config.names)?;

    Ok(())
}
