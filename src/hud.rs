//! Heads-up display text
//!
//! Health is shown as a percentage-style figure (20 per point) on each side
//! of the screen, plus one bar segment per remaining point.

use glam::Vec2;

use crate::sim::Side;
use crate::snapshot::{CraftView, MatchSnapshot};

/// Displayed health per point of craft health
pub const HP_DISPLAY_SCALE: u32 = 20;

/// Width of one health bar segment
pub const BAR_SEGMENT_WIDTH: f32 = 80.0;

/// One line of HUD text and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub pos: Vec2,
}

/// Status text for one craft
pub fn status_text(view: &CraftView) -> String {
    let shown = view.health.saturating_mul(HP_DISPLAY_SCALE);
    match (view.side, view.alive) {
        (Side::Player, true) => format!("Player HP: {shown}"),
        (Side::Player, false) => "You are dead...".to_string(),
        (Side::Opponent, true) => format!("Enemy HP: {shown}"),
        (Side::Opponent, false) => "Computer is dead...".to_string(),
    }
}

/// Both status lines, player on the left and opponent on the right
pub fn hud_lines(snapshot: &MatchSnapshot) -> [HudLine; 2] {
    let opponent = &snapshot.opponent;
    let opponent_x = if opponent.alive { 1790.0 } else { 1650.0 };
    [
        HudLine {
            text: status_text(&snapshot.player),
            pos: Vec2::new(10.0, 30.0),
        },
        HudLine {
            text: status_text(opponent),
            pos: Vec2::new(opponent_x, 30.0),
        },
    ]
}

/// Top-left corners of the health bar segments for a craft
pub fn health_bar_segments(view: &CraftView) -> Vec<Vec2> {
    let origin_x = match view.side {
        Side::Player => 0.0,
        Side::Opponent => 1500.0,
    };
    (0..view.bars)
        .map(|i| Vec2::new(origin_x + BAR_SEGMENT_WIDTH * i as f32, 10.0))
        .collect()
}
