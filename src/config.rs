//! Match tuning
//!
//! Every constant the simulation reads lives here so a match can be tuned
//! from a JSON file instead of recompiling.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Match configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Where both craft are warped at match start
    pub spawn: Vec2,

    // === Craft ===
    pub starting_health: u32,
    /// Degrees per tick while a turn control is held
    pub turn_step: f32,
    /// Velocity added per tick while thrust is held
    pub thrust: f32,
    /// Velocity multiplier applied every tick (sole speed limiter)
    pub damping: f32,

    // === Projectiles ===
    /// Units per tick
    pub projectile_speed: f32,
    /// Seconds before a projectile is evicted
    pub projectile_lifetime: f64,
    /// Seconds before the previous shot's expiry that a new one may fire
    pub early_refire: f64,
    pub contact_radius: f32,
    pub damage_per_hit: u32,
    /// Measure contact across the wrapped arena edges
    pub wrap_aware_contact: bool,

    // === Opponent ===
    /// Seconds the opponent lags behind the player's recorded motion
    pub trail_lag: f64,
    /// Seconds after match start before the opponent may fire
    pub opponent_fire_delay: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),

            starting_health: STARTING_HEALTH,
            turn_step: TURN_STEP_DEGREES,
            thrust: THRUST,
            damping: DAMPING,

            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            early_refire: EARLY_REFIRE,
            contact_radius: CONTACT_RADIUS,
            damage_per_hit: DAMAGE_PER_HIT,
            wrap_aware_contact: false,

            trail_lag: TRAIL_LAG,
            opponent_fire_delay: OPPONENT_FIRE_DELAY,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width as f64),
            ("arena_height", self.arena_height as f64),
            ("projectile_speed", self.projectile_speed as f64),
            ("projectile_lifetime", self.projectile_lifetime),
            ("contact_radius", self.contact_radius as f64),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                log::warn!("Rejected config: {field} = {value}");
                return Err(ConfigError::NotPositive(field));
            }
        }

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            log::warn!("Rejected config: damping = {}", self.damping);
            return Err(ConfigError::Damping(self.damping));
        }

        if !(self.early_refire >= 0.0 && self.early_refire < self.projectile_lifetime) {
            log::warn!(
                "Rejected config: early_refire = {} with lifetime {}",
                self.early_refire,
                self.projectile_lifetime
            );
            return Err(ConfigError::EarlyRefire {
                early_refire: self.early_refire,
                lifetime: self.projectile_lifetime,
            });
        }

        if self.trail_lag < 0.0 || self.opponent_fire_delay < 0.0 {
            return Err(ConfigError::NegativeDelay);
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("damping must be in (0, 1], got {0}")]
    Damping(f32),

    #[error("early_refire ({early_refire}s) must be in [0, projectile_lifetime ({lifetime}s))")]
    EarlyRefire { early_refire: f64, lifetime: f64 },

    #[error("trail_lag and opponent_fire_delay must not be negative")]
    NegativeDelay,
}
