//! Candy Drop - a tiny top-down catch-the-candy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scenes, entities, timers, collisions)
//! - `scene`: Scene lifecycle trait and the director that swaps scenes
//! - `input`: Per-frame input snapshot consumed by the simulation
//! - `assets`: String-keyed asset manifest handed to the host for preload
//! - `settings`: File-backed preferences

pub mod assets;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;

pub use input::FrameInput;
pub use scene::{Director, Scene, SceneCommand, SceneKey};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep - all per-frame rules assume 60 Hz
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical screen dimensions (the host letterboxes/scales this)
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 160.0;
    pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 30.0;
    pub const PLAYER_HALF_W: f32 = 8.0;
    pub const PLAYER_HALF_H: f32 = 8.0;

    /// Candy falls straight down at this speed (px/s)
    pub const CANDY_FALL_SPEED: f32 = 200.0;
    pub const CANDY_HALF: f32 = 6.0;
    /// Score awarded per candy
    pub const CANDY_SCORE: u64 = 10;

    /// Enemies home on the player's live position at this speed (px/s)
    pub const ENEMY_CHASE_SPEED: f32 = 100.0;
    pub const ENEMY_HALF: f32 = 8.0;

    /// Spawn timer intervals (milliseconds)
    pub const CANDY_SPAWN_INTERVAL_MS: f32 = 1000.0;
    pub const ENEMY_SPAWN_INTERVAL_MS: f32 = 2000.0;

    /// Start screen: logo falls this many pixels per frame until it rests
    pub const LOGO_FALL_STEP: f32 = 2.0;
    pub const LOGO_REST_Y: f32 = SCREEN_HEIGHT - 30.0;

    /// Start screen: prompt scale oscillates between these bounds
    pub const PROMPT_SCALE_MIN: f32 = 0.8;
    pub const PROMPT_SCALE_MAX: f32 = 1.2;
    pub const PROMPT_SCALE_STEP: f32 = 0.005;

    /// Entities fully outside the screen by this margin are culled
    pub const CULL_MARGIN: f32 = 16.0;
}
