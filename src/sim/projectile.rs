//! Laser projectiles and the per-side firing gate

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::craft::{Craft, Side};
use crate::heading_offset;

/// A laser bolt in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Firing side; its craft's `opponent` is the only valid target
    pub owner: Side,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, copied from the firer at launch
    pub heading: f32,
    /// Match time (seconds) at which the projectile is evicted
    pub expires_at: f64,
    /// Already dealt its one hit
    pub contacted: bool,
    /// Render flag, cleared on contact
    pub visible: bool,
}

impl Projectile {
    /// Launch from the firer's current position along its heading
    pub fn new(id: u32, firer: &Craft, now: f64, speed: f32, lifetime: f64) -> Self {
        Self {
            id,
            owner: firer.side,
            pos: firer.pos,
            vel: heading_offset(firer.heading, speed),
            heading: firer.heading,
            expires_at: now + lifetime,
            contacted: false,
            visible: true,
        }
    }

    /// Straight-line move with wrap
    pub fn advance(&mut self, arena: &Arena) {
        self.pos = arena.wrap(self.pos + self.vel);
    }

    /// Whether `target` is inside the contact radius
    ///
    /// Uses the plain Euclidean metric unless `wrap_aware` is set, so near
    /// misses across an arena edge do not count by default.
    pub fn in_contact(&self, target: &Craft, arena: &Arena, radius: f32, wrap_aware: bool) -> bool {
        let dist = if wrap_aware {
            arena.toroidal_distance(self.pos, target.pos)
        } else {
            arena.distance(self.pos, target.pos)
        };
        dist < radius
    }

    /// Spend this projectile's hit. It stays in its collection until expiry.
    pub fn register_contact(&mut self) {
        self.contacted = true;
        self.visible = false;
    }

    #[inline]
    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}

/// Whether a side may fire again
///
/// Reads only the most recent projectile in the side's collection: a shot is
/// allowed once that projectile is within `early_refire` seconds of expiring,
/// or when nothing is in flight.
pub fn can_fire(projectiles: &[Projectile], now: f64, early_refire: f64) -> bool {
    match projectiles.last() {
        None => true,
        Some(last) => last.expires_at - early_refire < now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(1920.0, 1080.0)
    }

    fn craft_at(side: Side, x: f32, y: f32, heading: f32) -> Craft {
        let mut craft = Craft::new(side, 5);
        craft.warp(Vec2::new(x, y));
        craft.heading = heading;
        craft
    }

    #[test]
    fn test_launch_captures_firer() {
        let firer = craft_at(Side::Opponent, 100.0, 200.0, 90.0);
        let p = Projectile::new(7, &firer, 4.0, 7.0, 2.0);
        assert_eq!(p.owner, Side::Opponent);
        assert_eq!(p.pos, Vec2::new(100.0, 200.0));
        assert!(p.vel.x.abs() < 1e-5);
        assert!((p.vel.y - 7.0).abs() < 1e-5);
        assert_eq!(p.expires_at, 6.0);
        assert!(!p.contacted);
        assert!(p.visible);
    }

    #[test]
    fn test_advance_wraps() {
        let firer = craft_at(Side::Player, 1916.0, 540.0, 0.0);
        let mut p = Projectile::new(1, &firer, 0.0, 7.0, 2.0);
        p.advance(&arena());
        assert!((p.pos.x - 3.0).abs() < 1e-3);
        assert_eq!(p.pos.y, 540.0);
    }

    #[test]
    fn test_contact_radius_is_exclusive() {
        let firer = craft_at(Side::Player, 100.0, 100.0, 0.0);
        let p = Projectile::new(1, &firer, 0.0, 7.0, 2.0);

        let near = craft_at(Side::Opponent, 149.0, 100.0, 0.0);
        let edge = craft_at(Side::Opponent, 150.0, 100.0, 0.0);
        assert!(p.in_contact(&near, &arena(), 50.0, false));
        assert!(!p.in_contact(&edge, &arena(), 50.0, false));
    }

    #[test]
    fn test_contact_across_edge_needs_wrap_aware() {
        let firer = craft_at(Side::Player, 5.0, 540.0, 0.0);
        let p = Projectile::new(1, &firer, 0.0, 7.0, 2.0);
        let target = craft_at(Side::Opponent, 1910.0, 540.0, 0.0);
        assert!(!p.in_contact(&target, &arena(), 50.0, false));
        assert!(p.in_contact(&target, &arena(), 50.0, true));
    }

    #[test]
    fn test_register_contact_hides() {
        let firer = craft_at(Side::Player, 0.0, 0.0, 0.0);
        let mut p = Projectile::new(1, &firer, 0.0, 7.0, 2.0);
        p.register_contact();
        assert!(p.contacted);
        assert!(!p.visible);
        assert!(!p.is_expired(1.99));
        assert!(p.is_expired(2.0));
    }

    #[test]
    fn test_can_fire_cadence() {
        let firer = craft_at(Side::Opponent, 0.0, 0.0, 0.0);
        let mut shots = Vec::new();
        assert!(can_fire(&shots, 2.0, 0.25));

        shots.push(Projectile::new(1, &firer, 2.0, 7.0, 2.0));
        assert!(!can_fire(&shots, 2.0, 0.25));
        assert!(!can_fire(&shots, 3.5, 0.25));
        assert!(!can_fire(&shots, 3.75, 0.25));
        assert!(can_fire(&shots, 3.76, 0.25));
    }
}
