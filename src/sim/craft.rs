//! Combatant craft
//!
//! The player and the opponent share this shape. Only the player is steered
//! by controls; the opponent is moved by replaying the player's trail.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::trail::TrailSample;
use crate::heading_offset;

/// Which combatant a craft (or projectile) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Slot in per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// A combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub side: Side,
    /// The craft this one shoots at (a handle into the match, never owned)
    pub opponent: Side,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, unbounded
    pub heading: f32,
    pub health: u32,
}

impl Craft {
    pub fn new(side: Side, health: u32) -> Self {
        Self {
            side,
            opponent: side.opposite(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            heading: 0.0,
            health,
        }
    }

    pub fn warp(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn turn_left(&mut self, step: f32) {
        self.heading -= step;
    }

    pub fn turn_right(&mut self, step: f32) {
        self.heading += step;
    }

    /// Push along the current heading; no speed cap beyond damping
    pub fn accelerate(&mut self, thrust: f32) {
        self.vel += heading_offset(self.heading, thrust);
    }

    /// Move by the current velocity, wrap, then decay velocity
    pub fn integrate_motion(&mut self, arena: &Arena, damping: f32) {
        self.pos = arena.wrap(self.pos + self.vel);
        self.vel *= damping;
    }

    /// Move by a recorded sample instead of own physics
    ///
    /// The craft's velocity is left alone; position follows the sample's
    /// velocity and heading is copied verbatim.
    pub fn replay(&mut self, sample: &TrailSample, arena: &Arena) {
        self.pos = arena.wrap(self.pos + sample.vel);
        self.heading = sample.heading;
    }

    /// Remove health, never below zero. Returns the health actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(1920.0, 1080.0)
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
        let craft = Craft::new(Side::Opponent, 5);
        assert_eq!(craft.opponent, Side::Player);
    }

    #[test]
    fn test_turning() {
        let mut craft = Craft::new(Side::Player, 5);
        craft.turn_right(4.5);
        craft.turn_right(4.5);
        craft.turn_left(4.5);
        assert_eq!(craft.heading, 4.5);

        // No wrapping of the heading itself
        for _ in 0..100 {
            craft.turn_right(4.5);
        }
        assert_eq!(craft.heading, 454.5);
    }

    #[test]
    fn test_coasting_is_bounded_by_damping() {
        let mut craft = Craft::new(Side::Player, 5);
        craft.warp(Vec2::new(960.0, 540.0));
        craft.accelerate(0.3);
        assert!((craft.vel.x - 0.3).abs() < 1e-6);
        assert!(craft.vel.y.abs() < 1e-6);

        for _ in 0..11 {
            craft.integrate_motion(&arena(), 0.95);
        }
        let moved = craft.pos.x - 960.0;
        assert!(moved > 0.0);
        assert!(moved < 6.0);
        assert!((craft.pos.y - 540.0).abs() < 1e-4);
    }

    #[test]
    fn test_motion_wraps() {
        let mut craft = Craft::new(Side::Player, 5);
        craft.warp(Vec2::new(1919.0, 1079.0));
        craft.vel = Vec2::new(5.0, 3.0);
        craft.integrate_motion(&arena(), 0.95);
        assert!((craft.pos.x - 4.0).abs() < 1e-3);
        assert!((craft.pos.y - 2.0).abs() < 1e-3);
        assert!((craft.vel.x - 4.75).abs() < 1e-5);
    }

    #[test]
    fn test_replay_copies_heading_and_moves() {
        let mut craft = Craft::new(Side::Opponent, 5);
        craft.warp(Vec2::new(10.0, 10.0));
        craft.vel = Vec2::new(100.0, 100.0);
        let sample = TrailSample {
            vel: Vec2::new(-20.0, 1.5),
            heading: 135.0,
            timestamp: 0.0,
        };
        craft.replay(&sample, &arena());
        assert!((craft.pos.x - 1910.0).abs() < 1e-3);
        assert!((craft.pos.y - 11.5).abs() < 1e-3);
        assert_eq!(craft.heading, 135.0);
        assert_eq!(craft.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut craft = Craft::new(Side::Player, 2);
        assert_eq!(craft.apply_damage(1), 1);
        assert!(craft.is_alive());
        assert_eq!(craft.apply_damage(5), 1);
        assert_eq!(craft.health, 0);
        assert!(!craft.is_alive());
        assert_eq!(craft.apply_damage(1), 0);
        assert_eq!(craft.health, 0);
    }
}
