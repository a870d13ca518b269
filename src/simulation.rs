use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{Error, Result};
use crate::game::{Dice, Game, Stats, SPACE_NAMES};

/// The number of games played between two progress reports.
pub const PROGRESS_BATCH: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
/// How many games to play and how to play them.
pub struct SimulationConfig {
    /// The number of independent games to simulate.
    pub games: u64,
    /// The number of turns in each game.
    pub turns: u32,
    /// The seed every game's random stream is derived from.
    pub seed: u64,
    /// The number of worker threads, or `None` to let rayon decide.
    pub threads: Option<usize>,
}

impl SimulationConfig {
    /// Return a validated configuration. Both `games` and `turns` must be positive.
    pub fn new(games: u64, turns: u32, seed: u64) -> Result<Self> {
        if games == 0 {
            return Err(Error::InvalidConfig(
                "the number of games must be positive".to_owned(),
            ));
        }
        if turns == 0 {
            return Err(Error::InvalidConfig(
                "the number of moves must be positive".to_owned(),
            ));
        }

        Ok(Self {
            games,
            turns,
            seed,
            threads: None,
        })
    }

    /// Run the games on exactly `threads` worker threads.
    pub fn with_threads(self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidConfig(
                "the number of threads must be positive".to_owned(),
            ));
        }

        Ok(Self {
            threads: Some(threads),
            ..self
        })
    }
}

/// A seed taken from the wall clock, for runs that don't ask for one.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Play game number `index` of a run seeded with `seed`, adding its events to `stats`.
///
/// Every game draws from its own ChaCha stream, so the outcome of a game
/// depends only on `seed` and `index`, never on which thread plays it.
pub fn play_game(seed: u64, index: u64, turns: u32, stats: &mut Stats) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);

    let mut game = Game::shuffled(&mut rng);
    let mut dice = Dice::new(rng);
    game.play(turns, &mut dice, stats);
}

/// Play every configured game in parallel and return the combined counters.
pub fn run(config: &SimulationConfig) -> Result<Stats> {
    log::info!(
        "simulating {} games of {} moves (seed {})",
        config.games,
        config.turns,
        config.seed
    );

    let simulate = || {
        let mut stats = Stats::new();

        for batch in batches(config.games) {
            let played = batch.end;

            stats += batch
                .into_par_iter()
                // Each worker fills its own counters, which are merged at the end
                .fold(Stats::new, |mut stats, index| {
                    play_game(config.seed, index, config.turns, &mut stats);
                    stats
                })
                .reduce(Stats::new, |a, b| a + b);

            log::debug!("played {}/{} games", played, config.games);
        }

        stats
    };

    let stats = match config.threads {
        Some(threads) => {
            log::debug!("using a pool of {} threads", threads);
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(simulate)
        }
        None => simulate(),
    };

    log_summary(&stats);

    Ok(stats)
}

/// Play every configured game, one after another, on the calling thread.
pub fn run_sequential(config: &SimulationConfig) -> Stats {
    let mut stats = Stats::new();

    for batch in batches(config.games) {
        let played = batch.end;

        for index in batch {
            play_game(config.seed, index, config.turns, &mut stats);
        }

        log::debug!("played {}/{} games", played, config.games);
    }

    log_summary(&stats);

    stats
}

/// Split game indexes `0..games` into consecutive runs of at most `PROGRESS_BATCH`.
fn batches(games: u64) -> impl Iterator<Item = Range<u64>> {
    (0..games)
        .step_by(PROGRESS_BATCH as usize)
        .map(move |start| start..games.min(start + PROGRESS_BATCH))
}

fn log_summary(stats: &Stats) {
    if let Some(space) = stats.most_ended() {
        log::info!(
            "{} turns recorded, most often ending on {} ({})",
            stats.total_ends(),
            SPACE_NAMES[space as usize],
            stats.ends[space as usize]
        );
    }
}
