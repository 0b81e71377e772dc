// headless.rs - Terminal driver: paced stepping without a window

use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use tokio::time::{self, MissedTickBehavior};

use life_engine::{CycleHistory, LifeConfig, LifeEngine, Pattern};

/// Runs up to `generations` steps on a single-threaded runtime.
pub fn run(
    config: LifeConfig,
    rng: StdRng,
    pattern: Option<&Pattern>,
    generations: u64,
    verbose: bool,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start the tokio runtime")?;

    let engine = runtime.block_on(drive(config, rng, pattern, generations, verbose))?;
    println!(
        "[Driver] finished at generation {} with {} live cells",
        engine.generation(),
        engine.population()
    );
    Ok(())
}

/// One loop awaits the ticker and then steps, so a step is never
/// started while another is still in flight. Late ticks are skipped
/// rather than bunched up.
async fn drive(
    config: LifeConfig,
    mut rng: StdRng,
    pattern: Option<&Pattern>,
    generations: u64,
    verbose: bool,
) -> Result<LifeEngine> {
    let mut engine = LifeEngine::from_config(&config)?;
    crate::populate(&mut engine, &config, &mut rng, pattern)?;

    let mut history = CycleHistory::new();
    history.record(engine.current().fingerprint());

    let mut ticker = time::interval(config.min_frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;
    let mut then = Instant::now();

    for _ in 0..generations {
        ticker.tick().await;
        let now = Instant::now();
        let dt = now.duration_since(then);
        then = now;

        engine.step();
        if verbose {
            println!(
                "[Driver] generation {} population {} fps: {:.1}",
                engine.generation(),
                engine.population(),
                1.0 / dt.as_secs_f64()
            );
        }
        if history.record(engine.current().fingerprint()) {
            println!("[Driver] generation {} repeats a recent state, stopping", engine.generation());
            break;
        }
    }
    Ok(engine)
}
