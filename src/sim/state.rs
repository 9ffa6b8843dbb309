//! Scene state and entity types
//!
//! Each scene owns all of its state; nothing lives at module level. A scene
//! struct is created on entry and dropped (or reset in place) on exit, so a
//! restart can never observe stale entities or timers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::timer::SpawnTimer;
use crate::consts::*;

/// Walk animation selected for the player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerAnim {
    /// No directional key held; animation stopped
    #[default]
    Idle,
    WalkLeft,
    WalkRight,
    WalkUp,
    WalkDown,
}

impl PlayerAnim {
    /// Pick the animation matching the dominant movement axis.
    /// Horizontal wins ties so diagonals face sideways.
    pub fn from_velocity(vel: Vec2) -> Self {
        if vel == Vec2::ZERO {
            return PlayerAnim::Idle;
        }
        if vel.x.abs() >= vel.y.abs() {
            if vel.x < 0.0 {
                PlayerAnim::WalkLeft
            } else {
                PlayerAnim::WalkRight
            }
        } else if vel.y < 0.0 {
            PlayerAnim::WalkUp
        } else {
            PlayerAnim::WalkDown
        }
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub anim: PlayerAnim,
}

impl Player {
    /// Player at the configured start position, standing still
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            anim: PlayerAnim::Idle,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_HALF_W, PLAYER_HALF_H))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A falling collectible
#[derive(Debug, Clone, PartialEq)]
pub struct Candy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Candy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(CANDY_HALF))
    }
}

/// A hazard that homes on the player
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(ENEMY_HALF))
    }
}

/// Gameplay events emitted during a frame, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A candy was picked up; carries the score after the pickup
    CandyCollected { score: u64 },
    /// An enemy touched the player; carries the score before the restart
    GameOver { final_score: u64 },
}

/// Start screen state: falling logo plus pulsing prompt
#[derive(Debug, Clone, PartialEq)]
pub struct StartState {
    /// Logo center y; falls from the top until it rests
    pub logo_y: f32,
    pub logo_falling: bool,
    /// Prompt text scale, a triangle wave within [0.8, 1.2]
    pub prompt_scale: f32,
    /// 1.0 growing, -1.0 shrinking
    pub prompt_dir: f32,
    /// Set once the transition fired; later presses are no-ops
    pub started: bool,
}

impl StartState {
    pub fn new() -> Self {
        Self {
            logo_y: 0.0,
            logo_falling: true,
            prompt_scale: 1.0,
            prompt_dir: 1.0,
            started: false,
        }
    }
}

impl Default for StartState {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game scene state (deterministic for a fixed seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u64,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Restarts since scene entry (game-over count)
    pub restarts: u32,
    pub player: Player,
    pub candies: Vec<Candy>,
    pub enemies: Vec<Enemy>,
    pub candy_timer: SpawnTimer,
    pub enemy_timer: SpawnTimer,
    /// Events emitted this frame, drained by the driver
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Fresh scene state; `reset` still has to run before the first frame
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            time_ticks: 0,
            restarts: 0,
            player: Player::new(),
            candies: Vec::new(),
            enemies: Vec::new(),
            candy_timer: SpawnTimer::new(CANDY_SPAWN_INTERVAL_MS),
            enemy_timer: SpawnTimer::new(ENEMY_SPAWN_INTERVAL_MS),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Scene entry logic, also the game-over restart path: score back to 0,
    /// player at the start position, entity lists cleared, both spawn
    /// timers cancelled and re-armed. The RNG stream keeps advancing so
    /// successive runs see different spawns.
    pub fn reset(&mut self) {
        self.score = 0;
        self.player = Player::new();
        self.candies.clear();
        self.enemies.clear();
        self.events.clear();
        self.candy_timer.cancel();
        self.enemy_timer.cancel();
        self.candy_timer.restart();
        self.enemy_timer.restart();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Score label the host renders with the pixel font
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Hand this frame's events to the driver
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
