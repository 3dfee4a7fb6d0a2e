use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Ball Fusion".into(),
            auto_close: 0.0,
        }
    }
}

/// Gravity in physics units (m/s^2), positive pointing down the screen.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: 9.81 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnBand<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnBand<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Seconds between drip spawns.
    pub interval: f32,
    /// Horizontal drop band as fractions of screen width.
    pub x_band: SpawnBand<f32>,
    /// Drop height from the top edge as a fraction of screen height.
    pub drop_height_frac: f32,
    /// Spawning pauses once summed ball area reaches this fraction of the arena.
    pub max_coverage: f32,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: 1.0,
            x_band: SpawnBand { min: 0.30, max: 0.70 },
            drop_height_frac: 0.10,
            max_coverage: 0.80,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub linear_damping: f32,
    /// Continuous collision detection on dynamic balls (fast drops tunnel otherwise).
    pub ccd: bool,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            linear_damping: 0.5,
            ccd: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    /// Seconds for the two dead balls to walk to their midpoint.
    pub duration: f32,
    /// Easing curve code: 0 linear, 1 smoothstep, 2 ease-out cubic.
    pub curve: u32,
}
impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            curve: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw rapier's collider wireframes on top of the sprites.
    pub rapier_wireframe: bool,
    /// Seconds between SIM stat log lines (debug feature builds).
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            rapier_wireframe: false,
            log_interval: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub spawn: SpawnConfig,
    pub balls: BallConfig,
    pub merge: MergeConfig,
    pub debug: DebugConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity warnings, logged at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y <= 0.0 {
            w.push(format!(
                "gravity.y is {} (downward-positive convention); balls will not fall",
                self.gravity.y
            ));
        }
        if self.spawn.interval <= 0.0 {
            w.push(format!(
                "spawn.interval {} must be > 0; spawner would run every frame",
                self.spawn.interval
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn.x_band.min)
            || !(0.0..=1.0).contains(&self.spawn.x_band.max)
            || self.spawn.x_band.min >= self.spawn.x_band.max
        {
            w.push(format!(
                "spawn.x_band ({}, {}) must be an increasing sub-range of 0..1",
                self.spawn.x_band.min, self.spawn.x_band.max
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn.drop_height_frac) {
            w.push(format!(
                "spawn.drop_height_frac {} outside 0..1; balls spawn off screen",
                self.spawn.drop_height_frac
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn.max_coverage) {
            w.push(format!(
                "spawn.max_coverage {} outside 0..1",
                self.spawn.max_coverage
            ));
        }
        if self.balls.linear_damping < 0.0 {
            w.push("balls.linear_damping negative -> energy gain".into());
        }
        if self.merge.duration < 0.0 {
            w.push("merge.duration negative -> treated as instant".into());
        }
        if self.merge.duration > 2.0 {
            w.push(format!(
                "merge.duration {} very long; merging pairs sit kinematic for many frames",
                self.merge.duration
            ));
        }
        if self.merge.curve > 2 {
            w.push(format!(
                "merge.curve {} unknown; falls back to linear",
                self.merge.curve
            ));
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }
}
