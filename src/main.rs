//! Headless demo driver (default binary).
//!
//! Runs a seeded puzzle session against the in-memory `SimWorld`,
//! printing a board snapshot roughly once per simulated second.
//!
//! Usage: `gridfall [seed] [ticks]`

use std::path::PathBuf;

use anyhow::Result;

use gridfall::engine::{PuzzleSession, SimWorld, StarLedger};
use gridfall::types::{
    DEFAULT_HEIGHT, DEFAULT_PALETTE_SIZE, DEFAULT_WIDTH, DEFAULT_X_START, DEFAULT_Y_START, TICK_MS,
};

/// Minimal stderr logger so engine log output is visible.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<()> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed: u32 = args.first().map(|s| s.parse()).transpose()?.unwrap_or(1);
    let ticks: u32 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(600);

    let ledger_path = PathBuf::from("gridfall-stars.json");
    let mut ledger = StarLedger::load(&ledger_path)?;

    let mut world = SimWorld::new(seed, DEFAULT_PALETTE_SIZE);
    let mut session = PuzzleSession::new(
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        DEFAULT_X_START,
        DEFAULT_Y_START,
    );

    let dt = TICK_MS as f32 / 1000.0;
    let snapshot_every = (1000 / TICK_MS).max(1);

    for tick in 0..ticks {
        session.tick(&mut world);
        world.advance(dt);

        if tick % snapshot_every == 0 {
            println!(
                "tick {:4}  score {:3}  blocks {}",
                tick,
                session.score(),
                world.len()
            );
            println!("{}", session.board().snapshot(&world));
        }

        if session.level_complete() {
            session.advance_level(&mut world, &mut ledger);
        }
    }

    ledger.save(&ledger_path)?;
    println!(
        "done after {} ticks: score {}, stars {}, blocks destroyed {}",
        ticks,
        session.score(),
        ledger.stars(),
        world.destroyed()
    );
    Ok(())
}
