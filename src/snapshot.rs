//! Read-only render view of a match
//!
//! Built once per frame from `MatchState`. The presentation layer picks
//! images from `SpriteKind` and draws sprites in the order given.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{MatchPhase, MatchState, Side};

/// Draw order, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Layer {
    Laser,
    Opponent,
    Player,
}

/// What to draw for a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    PlayerCraft,
    OpponentCraft,
    PlayerLaser,
    OpponentLaser,
}

impl SpriteKind {
    pub fn craft(side: Side) -> Self {
        match side {
            Side::Player => SpriteKind::PlayerCraft,
            Side::Opponent => SpriteKind::OpponentCraft,
        }
    }

    pub fn laser(owner: Side) -> Self {
        match owner {
            Side::Player => SpriteKind::PlayerLaser,
            Side::Opponent => SpriteKind::OpponentLaser,
        }
    }

    pub fn layer(self) -> Layer {
        match self {
            SpriteKind::PlayerCraft => Layer::Player,
            SpriteKind::OpponentCraft => Layer::Opponent,
            SpriteKind::PlayerLaser | SpriteKind::OpponentLaser => Layer::Laser,
        }
    }
}

/// A positioned, rotated image
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Degrees
    pub heading: f32,
}

/// Per-craft status for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraftView {
    pub side: Side,
    pub pos: Vec2,
    pub heading: f32,
    pub health: u32,
    pub alive: bool,
    /// Health bar segments to draw, one per point of health
    pub bars: u32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub elapsed: f64,
    pub phase: MatchPhase,
    pub player: CraftView,
    pub opponent: CraftView,
    /// Living craft and visible lasers, sorted by layer
    pub sprites: Vec<Sprite>,
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let view = |side: Side| {
            let craft = state.craft(side);
            CraftView {
                side,
                pos: craft.pos,
                heading: craft.heading,
                health: craft.health,
                alive: craft.is_alive(),
                bars: craft.health,
            }
        };

        let mut sprites = Vec::new();
        for side in Side::ALL {
            let craft = state.craft(side);
            if craft.is_alive() {
                sprites.push(Sprite {
                    kind: SpriteKind::craft(side),
                    pos: craft.pos,
                    heading: craft.heading,
                });
            }
            sprites.extend(
                state
                    .projectiles(side)
                    .iter()
                    .filter(|p| p.visible)
                    .map(|p| Sprite {
                        kind: SpriteKind::laser(p.owner),
                        pos: p.pos,
                        heading: p.heading,
                    }),
            );
        }
        // Stable sort keeps per-side firing order within a layer
        sprites.sort_by_key(|s| s.kind.layer());

        Self {
            elapsed: state.elapsed,
            phase: state.phase,
            player: view(Side::Player),
            opponent: view(Side::Opponent),
            sprites,
        }
    }

    pub fn craft(&self, side: Side) -> &CraftView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}
