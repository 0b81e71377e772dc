// app.rs - Window-side state around the engine: run/pause, pacing, editing

use std::time::{Duration, Instant};

use egui::Color32;
use rand::rngs::StdRng;

use life_engine::{CycleHistory, EngineError, FramePacer, LifeConfig, LifeEngine, PATTERNS, Pattern};

/// On-screen size of one cell, in points.
pub const CELL_SIZE: f32 = 5.0;

pub struct LifeApp {
    pub engine           : LifeEngine,
    pub config           : LifeConfig,
    pub is_running       : bool,
    pub live_color       : Color32,
    pub dead_color       : Color32,
    pub selected_pattern : usize,
    pub status           : Option<String>,   // last error shown under the controls

    rng     : StdRng,
    pacer   : FramePacer,
    history : CycleHistory,
    verbose : bool,
}

impl LifeApp {
    pub fn new(
        config: LifeConfig,
        mut rng: StdRng,
        pattern: Option<&Pattern>,
        verbose: bool,
    ) -> Result<Self, EngineError> {
        let mut engine = LifeEngine::from_config(&config)?;
        crate::populate(&mut engine, &config, &mut rng, pattern)?;
        let mut history = CycleHistory::new();
        history.record(engine.current().fingerprint());

        Ok(Self {
            engine,
            config,
            is_running: true,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            status: None,
            rng,
            pacer: FramePacer::new(config.min_frame_interval()),
            history,
            verbose,
        })
    }

    pub fn window_size(&self) -> [f32; 2] {
        let w = self.engine.width() as f32 * CELL_SIZE;
        let h = self.engine.height() as f32 * CELL_SIZE;
        [w.max(640.0) + 20.0, h + 160.0]
    }

    /// Steps once if running and the frame interval has passed.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running {
            return false;
        }
        let Some(dt) = self.pacer.poll(now) else {
            return false;
        };

        self.engine.step();
        if self.verbose {
            println!("[Driver] fps: {:.1}", 1.0 / dt.as_secs_f64());
        }
        if self.history.record(self.engine.current().fingerprint()) {
            println!(
                "[Driver] generation {} repeats a recent state, pausing",
                self.engine.generation()
            );
            self.set_running(false);
        }
        true
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
        self.pacer.reset();
    }

    pub fn set_target_fps(&mut self, fps: f64) {
        self.config.target_fps = fps;
        self.pacer.set_min_interval(Duration::from_secs_f64(1.0 / fps));
    }

    pub fn clear(&mut self) {
        self.set_running(false);
        self.engine.clear();
        self.history.clear();
    }

    pub fn randomize(&mut self) {
        self.history.clear();
        let result = crate::populate(&mut self.engine, &self.config, &mut self.rng, None);
        self.restart(result);
    }

    pub fn apply_selected_pattern(&mut self) {
        self.set_running(false);
        self.history.clear();
        let pattern = PATTERNS.get(self.selected_pattern);
        let result = crate::populate(&mut self.engine, &self.config, &mut self.rng, pattern);
        self.restart(result);
    }

    /// Starting grid counts as the first entry of the history.
    fn restart(&mut self, result: Result<(), EngineError>) {
        if result.is_ok() {
            self.history.record(self.engine.current().fingerprint());
        }
        self.report(result);
    }

    /// Pointer drag: paint the 3x3 block under the cursor.
    pub fn paint(&mut self, x: usize, y: usize) {
        let result = self.engine.activate_region(x, y);
        self.report(result);
    }

    /// Pointer click while paused: flip one cell.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let result = self.engine.toggle(x, y).map(|_| ());
        self.report(result);
    }

    fn report(&mut self, result: Result<(), EngineError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => {
                eprintln!("[App] {e}");
                self.status = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(pattern: Option<&Pattern>) -> LifeApp {
        let config = LifeConfig { width: 12, height: 12, target_fps: 10.0, ..LifeConfig::default() };
        LifeApp::new(config, StdRng::seed_from_u64(3), pattern, false).unwrap()
    }

    #[test]
    fn test_tick_respects_frame_interval() {
        let mut app = app(Pattern::by_name("blinker"));
        let t0 = Instant::now();
        assert!(!app.tick(t0));
        assert!(!app.tick(t0 + Duration::from_millis(50)));
        assert!(app.tick(t0 + Duration::from_millis(100)));
        assert_eq!(app.engine.generation(), 1);
    }

    #[test]
    fn test_paused_app_does_not_step() {
        let mut app = app(None);
        app.set_running(false);
        let t0 = Instant::now();
        assert!(!app.tick(t0));
        assert!(!app.tick(t0 + Duration::from_secs(1)));
        assert_eq!(app.engine.generation(), 0);
    }

    #[test]
    fn test_still_life_pauses() {
        let mut app = app(Pattern::by_name("block"));
        let t0 = Instant::now();
        app.tick(t0);
        assert!(app.tick(t0 + Duration::from_millis(100)));
        assert!(!app.is_running);
    }

    #[test]
    fn test_applied_still_life_pauses_after_one_step() {
        let mut app = app(None);
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Block").unwrap();
        app.apply_selected_pattern();
        app.set_running(true);
        let t0 = Instant::now();
        app.tick(t0);
        assert!(app.tick(t0 + Duration::from_millis(100)));
        assert_eq!(app.engine.generation(), 1);
        assert!(!app.is_running);
    }

    #[test]
    fn test_errors_land_in_status() {
        let mut app = app(None);
        app.paint(50, 50);
        assert!(app.status.as_deref().is_some_and(|s| s.contains("outside")));
        app.paint(5, 5);
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_clear_then_randomize() {
        let mut app = app(None);
        app.clear();
        assert_eq!(app.engine.population(), 0);
        assert!(!app.is_running);
        app.randomize();
        assert_eq!(app.status, None);
    }
}
