//! Match state
//!
//! Everything the tick mutates lives in `MatchState`: both craft, both
//! projectile collections, the player's trail and the match clock.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::craft::{Craft, Side};
use super::projectile::Projectile;
use super::trail::TrailRecorder;
use crate::config::MatchConfig;

/// Outcome of the contest so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Both craft alive
    Active,
    PlayerDefeated,
    OpponentDefeated,
    /// Both craft reached zero health on the same tick
    MutualDestruction,
}

impl MatchPhase {
    pub fn is_over(self) -> bool {
        self != MatchPhase::Active
    }

    /// Derive the phase from current aliveness
    pub fn from_alive(player_alive: bool, opponent_alive: bool) -> Self {
        match (player_alive, opponent_alive) {
            (true, true) => MatchPhase::Active,
            (false, true) => MatchPhase::PlayerDefeated,
            (true, false) => MatchPhase::OpponentDefeated,
            (false, false) => MatchPhase::MutualDestruction,
        }
    }
}

/// Things that happened during the last tick (for audio/effects hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    ShotFired { side: Side, projectile_id: u32 },
    Hit { target: Side, projectile_id: u32, health: u32 },
    Defeated { side: Side },
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    pub arena: Arena,
    /// Indexed by `Side::index`
    crafts: [Craft; 2],
    /// Projectiles fired by each side, oldest first
    projectiles: [Vec<Projectile>; 2],
    /// The player's recorded motion awaiting replay by the opponent
    pub trail: TrailRecorder,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds since match start
    pub elapsed: f64,
    pub phase: MatchPhase,
    /// Events produced by the most recent tick
    pub events: Vec<MatchEvent>,
    close_requested: bool,
    next_id: u32,
}

impl MatchState {
    /// Start a match: both craft warped to the spawn point at full health
    pub fn new(config: MatchConfig) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let spawn = arena.wrap(config.spawn);

        let mut player = Craft::new(Side::Player, config.starting_health);
        player.warp(spawn);
        let mut opponent = Craft::new(Side::Opponent, config.starting_health);
        opponent.warp(spawn);

        let phase = MatchPhase::from_alive(player.is_alive(), opponent.is_alive());

        log::info!(
            "Match started: arena {}x{}, health {}",
            arena.width,
            arena.height,
            config.starting_health
        );

        Self {
            config,
            arena,
            crafts: [player, opponent],
            projectiles: [Vec::new(), Vec::new()],
            trail: TrailRecorder::new(),
            time_ticks: 0,
            elapsed: 0.0,
            phase,
            events: Vec::new(),
            close_requested: false,
            next_id: 1,
        }
    }

    pub fn craft(&self, side: Side) -> &Craft {
        &self.crafts[side.index()]
    }

    pub fn craft_mut(&mut self, side: Side) -> &mut Craft {
        &mut self.crafts[side.index()]
    }

    pub fn player(&self) -> &Craft {
        self.craft(Side::Player)
    }

    pub fn opponent(&self) -> &Craft {
        self.craft(Side::Opponent)
    }

    /// Projectiles fired by `side`, oldest first
    pub fn projectiles(&self, side: Side) -> &[Projectile] {
        &self.projectiles[side.index()]
    }

    pub(crate) fn projectiles_mut(&mut self, side: Side) -> &mut Vec<Projectile> {
        &mut self.projectiles[side.index()]
    }

    /// Split borrow for contact resolution: one side's shots plus every craft
    pub(crate) fn shots_and_crafts(&mut self, side: Side) -> (&mut Vec<Projectile>, &mut [Craft; 2]) {
        (&mut self.projectiles[side.index()], &mut self.crafts)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ask the host to shut the match down
    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("Close requested at {:.2}s", self.elapsed);
        }
        self.close_requested = true;
    }

    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}
