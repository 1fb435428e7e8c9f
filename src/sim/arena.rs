//! Toroidal arena geometry
//!
//! Anything leaving one edge re-enters from the opposite edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::wrap_scalar;

/// The wrap-around playfield, spanning `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wrap a position back into the arena on both axes
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_scalar(pos.x, self.width), wrap_scalar(pos.y, self.height))
    }

    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    /// Straight-line distance, ignoring the wrapped edges
    ///
    /// Two points hugging opposite edges are far apart by this metric even
    /// though they are neighbours on the torus.
    #[inline]
    pub fn distance(&self, a: Vec2, b: Vec2) -> f32 {
        a.distance(b)
    }

    /// Shortest distance on the torus
    pub fn toroidal_distance(&self, a: Vec2, b: Vec2) -> f32 {
        let d = (a - b).abs();
        let dx = d.x.min(self.width - d.x);
        let dy = d.y.min(self.height - d.y);
        Vec2::new(dx, dy).length()
    }
}
