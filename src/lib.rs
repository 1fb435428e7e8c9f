//! Star Fighter - A two-craft arena dogfight
//!
//! Core modules:
//! - `sim`: Simulation core (motion, trail replay, projectiles, contact)
//! - `config`: Data-driven match tuning
//! - `snapshot`: Read-only render view of a match
//! - `hud`: Status text for the heads-up display
//! - `pilot`: Seeded demo controls for headless runs

pub mod config;
pub mod hud;
pub mod pilot;
pub mod sim;
pub mod snapshot;

pub use config::{ConfigError, MatchConfig};
pub use snapshot::MatchSnapshot;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1920.0;
    pub const ARENA_HEIGHT: f32 = 1080.0;

    /// Both craft start here
    pub const SPAWN_X: f32 = 960.0;
    pub const SPAWN_Y: f32 = 540.0;

    /// Craft defaults
    pub const STARTING_HEALTH: u32 = 5;
    pub const TURN_STEP_DEGREES: f32 = 4.5;
    pub const THRUST: f32 = 0.3;
    pub const DAMPING: f32 = 0.95;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_LIFETIME: f64 = 2.0;
    /// A new shot may leave this long before the previous one expires
    pub const EARLY_REFIRE: f64 = 0.25;
    pub const CONTACT_RADIUS: f32 = 50.0;
    pub const DAMAGE_PER_HIT: u32 = 1;

    /// Opponent replays the player's motion this many seconds late
    pub const TRAIL_LAG: f64 = 3.0;
    /// Opponent holds fire until the match is this old
    pub const OPPONENT_FIRE_DELAY: f64 = 2.0;
}

/// Offset of length `len` along a heading given in degrees
///
/// 0° points along +x; positive angles turn toward +y.
#[inline]
pub fn heading_offset(heading_deg: f32, len: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos() * len, rad.sin() * len)
}

/// Wrap a scalar into `[0, extent)`
#[inline]
pub fn wrap_scalar(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_offset_axes() {
        let east = heading_offset(0.0, 0.3);
        assert!((east.x - 0.3).abs() < 1e-6);
        assert!(east.y.abs() < 1e-6);

        let south = heading_offset(90.0, 7.0);
        assert!(south.x.abs() < 1e-5);
        assert!((south.y - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_scalar() {
        assert_eq!(wrap_scalar(1925.0, 1920.0), 5.0);
        assert_eq!(wrap_scalar(-5.0, 1080.0), 1075.0);
        assert_eq!(wrap_scalar(1920.0, 1920.0), 0.0);
        let tiny = wrap_scalar(-1e-9, 1920.0);
        assert!((0.0..1920.0).contains(&tiny));
    }
}
