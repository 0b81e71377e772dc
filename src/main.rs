// main.rs - Game of Life front end: egui window or headless terminal run

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use life_engine::config::{
    DEFAULT_HEIGHT, DEFAULT_LIVE_PROBABILITY, DEFAULT_TARGET_FPS, DEFAULT_WIDTH,
};
use life_engine::{EngineError, LifeConfig, LifeEngine, Pattern};

mod app;
mod headless;
mod ui;

use app::LifeApp;

#[derive(Parser, Debug)]
#[command(name = "fx_life", version, about = "Conway's Game of Life")]
struct Cli {
    /// Grid columns, including the dead frontier
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid rows, including the dead frontier
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Initial fraction of live cells
    #[arg(long, default_value_t = DEFAULT_LIVE_PROBABILITY)]
    probability: f64,

    /// Maximum generations per second
    #[arg(long, default_value_t = DEFAULT_TARGET_FPS)]
    fps: f64,

    /// Fixed RNG seed for a reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern instead of random cells
    #[arg(long)]
    pattern: Option<String>,

    /// Run in the terminal without opening a window
    #[arg(long)]
    headless: bool,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Log every step
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> LifeConfig {
        LifeConfig {
            width: self.width,
            height: self.height,
            live_probability: self.probability,
            target_fps: self.fps,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn pattern(&self) -> Result<Option<&'static Pattern>> {
        self.pattern
            .as_deref()
            .map(|name| Pattern::by_name(name).with_context(|| format!("unknown pattern '{name}'")))
            .transpose()
    }
}

/// Fills a cleared engine either with `pattern` or with random cells.
pub(crate) fn populate(
    engine: &mut LifeEngine,
    config: &LifeConfig,
    rng: &mut StdRng,
    pattern: Option<&Pattern>,
) -> Result<(), EngineError> {
    engine.clear();
    match pattern {
        Some(pattern) => engine.place_pattern_centered(pattern),
        None => engine.seed(config.live_probability, rng),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid simulation parameters")?;
    let pattern = cli.pattern()?;

    println!(
        "[Driver] {}x{} grid, p={}, {} fps, start: {}",
        config.width,
        config.height,
        config.live_probability,
        config.target_fps,
        pattern.map_or("random", |p| p.name),
    );

    if cli.headless {
        return headless::run(config, cli.rng(), pattern, cli.generations, cli.verbose);
    }

    let app = LifeApp::new(config, cli.rng(), pattern, cli.verbose)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life!",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["fx_life"]).unwrap();
        assert_eq!(cli.config(), LifeConfig::default());
        assert!(!cli.headless);
        assert_eq!(cli.generations, 100);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "fx_life", "--width", "40", "--height", "30", "--probability", "0.5",
            "--fps", "25", "--seed", "9", "--headless", "-v",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!((config.width, config.height), (40, 30));
        assert_eq!(config.live_probability, 0.5);
        assert_eq!(config.target_fps, 25.0);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.headless && cli.verbose);
    }

    #[test]
    fn test_unknown_pattern_is_an_error() {
        let cli = Cli::try_parse_from(["fx_life", "--pattern", "spaceship"]).unwrap();
        assert!(cli.pattern().is_err());

        let cli = Cli::try_parse_from(["fx_life", "--pattern", "glider"]).unwrap();
        assert_eq!(cli.pattern().unwrap().map(|p| p.name), Some("Glider"));
    }

    #[test]
    fn test_populate_reseeds_running_engine() {
        let config = LifeConfig { width: 20, height: 20, live_probability: 1.0, ..LifeConfig::default() };
        let mut engine = LifeEngine::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        populate(&mut engine, &config, &mut rng, None).unwrap();
        assert_eq!(engine.population(), 18 * 18);

        populate(&mut engine, &config, &mut rng, Pattern::by_name("blinker")).unwrap();
        assert_eq!(engine.population(), 3);
    }
}
