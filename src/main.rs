//! Lava Runner entry point
//!
//! Runs a level set headless and reports each level's outcome.
//!
//! Usage: `lava-runner [levels.json] [settings.json]`

use lava_runner::levels::{default_level_plans, load_level_plans};
use lava_runner::sim::{LevelParser, Status, run_level};
use lava_runner::{Result, Settings};

fn main() {
    env_logger::init();
    log::info!("Lava Runner (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let plans = match args.next() {
        Some(path) => load_level_plans(path)?,
        None => default_level_plans(),
    };
    let settings = args.next().map(Settings::load).unwrap_or_default();
    let parser = LevelParser::standard().with_seed(settings.seed);

    let mut won = 0;
    for (index, plan) in plans.iter().enumerate() {
        let mut level = parser.parse(plan.as_slice());
        level.finish_delay = settings.finish_delay;

        let outcome = run_level(&mut level, settings.step, settings.max_ticks_per_level);
        let verdict = match outcome.status {
            Some(Status::Won) => {
                won += 1;
                "won"
            }
            Some(Status::Lost) => "lost",
            None => "unfinished",
        };
        log::info!(
            "Level {} ({}x{}, {} actors left): {} after {} ticks",
            index + 1,
            level.width(),
            level.height(),
            level.actors.len(),
            verdict,
            outcome.ticks
        );
        println!("level {}: {}", index + 1, verdict);
    }

    println!("{won}/{} levels won", plans.len());
    Ok(())
}
