use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::AnimalKind;

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// The game runs in a fixed-size, non-resizable window; the camera's
/// horizontal half-extent is derived from this aspect ratio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in physical pixels.
    pub width: u32,
    /// Window height in physical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    /// 640 × 640, titled "Game1: Text/Tiles".
    fn default() -> Self {
        Self {
            title: "Game1: Text/Tiles".into(),
            width: 640,
            height: 640,
        }
    }
}

impl WindowConfig {
    /// Aspect ratio (`width / height`).
    ///
    /// Returns `0.0` when `height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }
}

// ── AnimalProfile ─────────────────────────────────────────────────────────────

/// Per-kind animal constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimalProfile {
    /// Chase speed at game start, in world units per frame.
    pub speed: f32,
    /// Base for the respawn speed, which is `respawn_base_speed * total_time / 100`.
    pub respawn_base_speed: f32,
    /// Health removed per frame of contact.
    pub damage: f32,
    /// Meat granted when harvested.
    pub meat_yield: u32,
    /// Seconds a dead animal waits before coming back.
    pub respawn_interval: f32,
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Gameplay tuning. Defaults reproduce the reference game.
///
/// Decay and growth rates are per frame, not per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_speed: f32,
    pub health_decay: f32,
    pub temp_decay: f32,
    pub meat_regen: f32,
    pub wizard_regen: f32,
    pub tree_grow_rate: f32,
    pub trees_per_screen: usize,
    /// Lumber gained from chopping one grown tree.
    pub lumber_per_tree: u32,
    /// Initial difficulty scalar applied to every animal's detection radius.
    pub box_size_multiplier: f32,
    /// Factor the difficulty scalar is multiplied by on every respawn.
    pub respawn_difficulty_factor: f32,
    pub wizard_box: f32,
    pub wizard_speed: f32,
    pub tree_box: f32,
    pub wizard_start: Vec2,
    /// X offset applied to the wizard on every screen transition.
    pub wizard_shift: f32,
    /// Where dead animals are parked, far outside the camera view.
    pub dead_sentinel: Vec2,
    /// Vertical camera half-extent; the horizontal one follows the aspect ratio.
    pub camera_half_extent: f32,
    pub wolf: AnimalProfile,
    pub leopard: AnimalProfile,
    pub lion: AnimalProfile,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 0.05,
            health_decay: 0.000_37,
            temp_decay: 0.000_037,
            meat_regen: 0.1,
            wizard_regen: 0.75,
            tree_grow_rate: 0.000_2,
            trees_per_screen: 8,
            lumber_per_tree: 1,
            box_size_multiplier: 1000.0,
            respawn_difficulty_factor: 1.5,
            wizard_box: 0.1,
            wizard_speed: 0.0,
            tree_box: 0.05,
            wizard_start: Vec2::new(1.6, 0.2),
            wizard_shift: 1.0,
            dead_sentinel: Vec2::new(10.0, 10.0),
            camera_half_extent: 10.0,
            wolf: AnimalProfile {
                speed: 0.000_2,
                respawn_base_speed: 0.000_2,
                damage: 0.000_2,
                meat_yield: 1,
                respawn_interval: 30.0,
            },
            leopard: AnimalProfile {
                speed: 0.000_5,
                respawn_base_speed: 0.000_3,
                damage: 0.000_3,
                meat_yield: 2,
                respawn_interval: 60.0,
            },
            lion: AnimalProfile {
                speed: 0.000_3,
                respawn_base_speed: 0.000_5,
                damage: 0.000_5,
                meat_yield: 3,
                respawn_interval: 120.0,
            },
        }
    }
}

impl GameConfig {
    pub fn profile(&self, kind: AnimalKind) -> &AnimalProfile {
        match kind {
            AnimalKind::Wolf => &self.wolf,
            AnimalKind::Leopard => &self.leopard,
            AnimalKind::Lion => &self.lion,
        }
    }
}

// ── Config file ───────────────────────────────────────────────────────────────

/// Everything the binary can read from a JSON config file.
/// Missing sections and fields fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub game: GameConfig,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
