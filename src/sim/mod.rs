//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entities keep insertion order, ids only grow)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Aabb, clamp_to_screen, outside_screen};
pub use state::{Candy, Enemy, GameEvent, GameState, Player, PlayerAnim, StartState};
pub use tick::{game_update, start_update};
pub use timer::SpawnTimer;
