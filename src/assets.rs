//! Asset manifest
//!
//! The host engine owns loading and decoding; scenes only name the
//! string-keyed resources they need before `create` runs.

/// A resource the host must load before a scene starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    SpriteSheet,
    Font,
}

/// One entry of a scene's preload manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetKey {
    /// String id the scene refers to the resource by
    pub id: &'static str,
    /// Path relative to the host's asset root
    pub path: &'static str,
    pub kind: AssetKind,
}

pub const START_IMAGE: AssetKey = AssetKey {
    id: "start",
    path: "png/start.png",
    kind: AssetKind::Image,
};

pub const LOGO_IMAGE: AssetKey = AssetKey {
    id: "logo",
    path: "png/logo.png",
    kind: AssetKind::Image,
};

pub const PLAYER_SHEET: AssetKey = AssetKey {
    id: "player",
    path: "png/player.png",
    kind: AssetKind::SpriteSheet,
};

pub const CANDY_IMAGE: AssetKey = AssetKey {
    id: "candy",
    path: "png/candy.png",
    kind: AssetKind::Image,
};

pub const ENEMY_IMAGE: AssetKey = AssetKey {
    id: "enemy",
    path: "png/enemy.png",
    kind: AssetKind::Image,
};

pub const PIXEL_FONT: AssetKey = AssetKey {
    id: "pixel_font",
    path: "fonts/PixelMplus12-Regular.ttf",
    kind: AssetKind::Font,
};

/// Everything the start screen draws
pub const START_SCENE_ASSETS: &[AssetKey] = &[START_IMAGE, LOGO_IMAGE, PIXEL_FONT];

/// Everything the game scene draws
pub const GAME_SCENE_ASSETS: &[AssetKey] = &[PLAYER_SHEET, CANDY_IMAGE, ENEMY_IMAGE, PIXEL_FONT];
