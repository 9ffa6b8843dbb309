//! Scene lifecycle and the director
//!
//! Scenes are plain state-holder structs behind a shared lifecycle
//! interface. The director holds the single active scene and performs the
//! Start -> Game handoff by swapping it; the game scene handles its own
//! game-over restart internally by re-running its entry logic.

use crate::assets::{AssetKey, GAME_SCENE_ASSETS, START_SCENE_ASSETS};
use crate::input::FrameInput;
use crate::sim::{self, GameState, StartState};

/// Named game modes; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Start,
    Game,
}

/// What a scene asks the director to do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    SwitchTo(SceneKey),
}

/// The lifecycle the host drives: `preload` once, `create` once, then
/// `update` every frame while the scene is active
pub trait Scene {
    fn key(&self) -> SceneKey;

    /// Resources the host must load before `create` runs
    fn preload(&self) -> &'static [AssetKey];

    /// Scene entry logic; safe to run again as a restart
    fn create(&mut self);

    /// One fixed-timestep frame
    fn update(&mut self, input: &FrameInput, dt: f32) -> SceneCommand;

    fn as_start(&self) -> Option<&StartScene> {
        None
    }

    fn as_game(&self) -> Option<&GameScene> {
        None
    }

    fn as_game_mut(&mut self) -> Option<&mut GameScene> {
        None
    }
}

/// Title screen: falling logo, pulsing prompt, waits for the start key
pub struct StartScene {
    pub state: StartState,
}

impl StartScene {
    pub fn new() -> Self {
        Self {
            state: StartState::new(),
        }
    }
}

impl Default for StartScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for StartScene {
    fn key(&self) -> SceneKey {
        SceneKey::Start
    }

    fn preload(&self) -> &'static [AssetKey] {
        START_SCENE_ASSETS
    }

    fn create(&mut self) {
        self.state = StartState::new();
    }

    fn update(&mut self, input: &FrameInput, _dt: f32) -> SceneCommand {
        if sim::start_update(&mut self.state, input) {
            SceneCommand::SwitchTo(SceneKey::Game)
        } else {
            SceneCommand::None
        }
    }

    fn as_start(&self) -> Option<&StartScene> {
        Some(self)
    }
}

/// The playfield: player, spawners, score, restart-on-collision loop
pub struct GameScene {
    pub state: GameState,
}

impl GameScene {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
        }
    }
}

impl Scene for GameScene {
    fn key(&self) -> SceneKey {
        SceneKey::Game
    }

    fn preload(&self) -> &'static [AssetKey] {
        GAME_SCENE_ASSETS
    }

    fn create(&mut self) {
        self.state.reset();
    }

    fn update(&mut self, input: &FrameInput, dt: f32) -> SceneCommand {
        sim::game_update(&mut self.state, input, dt);
        SceneCommand::None
    }

    fn as_game(&self) -> Option<&GameScene> {
        Some(self)
    }

    fn as_game_mut(&mut self) -> Option<&mut GameScene> {
        Some(self)
    }
}

/// Owns the single active scene and applies scene commands
pub struct Director {
    active: Box<dyn Scene>,
    seed: u64,
}

impl Director {
    /// Boot on the start screen with the given run seed
    pub fn new(seed: u64) -> Self {
        let mut start = StartScene::new();
        start.create();
        Self {
            active: Box::new(start),
            seed,
        }
    }

    pub fn active(&self) -> &dyn Scene {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Scene {
        self.active.as_mut()
    }

    pub fn scene_key(&self) -> SceneKey {
        self.active.key()
    }

    /// Step the active scene one frame and apply any requested transition
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        let command = self.active.update(input, dt);
        self.apply(command);
    }

    fn apply(&mut self, command: SceneCommand) {
        let SceneCommand::SwitchTo(key) = command else {
            return;
        };
        log::info!("switching scene to {:?}", key);
        let mut next: Box<dyn Scene> = match key {
            SceneKey::Start => Box::new(StartScene::new()),
            SceneKey::Game => Box::new(GameScene::new(self.seed)),
        };
        next.create();
        self.active = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    #[test]
    fn test_boots_on_start_scene() {
        let director = Director::new(1);
        assert_eq!(director.scene_key(), SceneKey::Start);
        assert!(!director.active().preload().is_empty());
    }

    #[test]
    fn test_start_key_switches_to_fresh_game() {
        let mut director = Director::new(1);
        let press = FrameInput {
            start_pressed: true,
            ..Default::default()
        };
        director.update(&press, SIM_DT);

        assert_eq!(director.scene_key(), SceneKey::Game);
        let game = director.active().as_game().unwrap();
        assert_eq!(game.state.score, 0);
        assert_eq!(
            game.state.player.pos,
            Vec2::new(PLAYER_START_X, PLAYER_START_Y)
        );
        assert!(game.state.candies.is_empty());
        assert!(game.state.enemies.is_empty());
    }

    #[test]
    fn test_start_scene_animates_until_pressed() {
        let mut director = Director::new(1);
        for _ in 0..10 {
            director.update(&FrameInput::default(), SIM_DT);
        }
        assert_eq!(director.scene_key(), SceneKey::Start);
        let start = director.active().as_start().unwrap();
        assert_eq!(start.state.logo_y, 10.0 * LOGO_FALL_STEP);
    }

    #[test]
    fn test_game_scene_stays_active_after_game_over() {
        let mut director = Director::new(1);
        let press = FrameInput {
            start_pressed: true,
            ..Default::default()
        };
        director.update(&press, SIM_DT);

        // Run well past several spawn intervals; restarts keep us in Game
        for _ in 0..600 {
            director.update(&FrameInput::default(), SIM_DT);
        }
        assert_eq!(director.scene_key(), SceneKey::Game);
    }
}
