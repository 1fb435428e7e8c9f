//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time only advances through `tick`
//! - Stable iteration order (player side first, projectiles oldest first)
//! - The opponent never decides anything; it replays the player's trail

pub mod arena;
pub mod craft;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod trail;

pub use arena::Arena;
pub use craft::{Craft, Side};
pub use projectile::{Projectile, can_fire};
pub use state::{MatchEvent, MatchPhase, MatchState};
pub use tick::{TickInput, tick};
pub use trail::{TrailRecorder, TrailSample};
