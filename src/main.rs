//! Candy Drop entry point
//!
//! Runs the director headlessly with a scripted demo input. A graphical
//! host drives the same `Driver::update` from its frame callback and draws
//! the display state the scenes expose.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use candy_drop::consts::{MAX_SUBSTEPS, SIM_DT};
use candy_drop::sim::GameEvent;
use candy_drop::{Director, FrameInput, Settings};

/// Fixed-timestep accumulator over the director
struct Driver {
    director: Director,
    accumulator: f32,
    input: FrameInput,
}

impl Driver {
    fn new(seed: u64) -> Self {
        Self {
            director: Director::new(seed),
            accumulator: 0.0,
            input: FrameInput::default(),
        }
    }

    /// Advance by one host frame's wall-clock delta
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            self.director.update(&input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_presses();
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    log::info!(
        "Candy Drop starting (window scale {}x, fps counter {})",
        settings.window_scale,
        if settings.show_fps { "on" } else { "off" }
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut driver = Driver::new(seed);
    log::info!("seed {}", seed);

    // Scripted demo: press start, then sweep left and right for ten seconds
    driver.input.start_pressed = true;
    let mut collected = 0u32;
    let mut game_overs = 0u32;

    for frame in 0..600u32 {
        driver.input.left = (frame / 60) % 2 == 0;
        driver.input.right = !driver.input.left;
        driver.update(SIM_DT);

        if let Some(game) = driver.director.active_mut().as_game_mut() {
            for event in game.state.drain_events() {
                match event {
                    GameEvent::CandyCollected { score } => {
                        collected += 1;
                        log::info!("collected candy, score {}", score);
                    }
                    GameEvent::GameOver { final_score } => {
                        game_overs += 1;
                        log::info!("demo run ended at {}", final_score);
                    }
                }
            }
        }
    }

    if let Some(game) = driver.director.active().as_game() {
        log::info!(
            "demo finished: {} candy collected, {} game overs, {}",
            collected,
            game_overs,
            game.state.score_text()
        );
    }
}
