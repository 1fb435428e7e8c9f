//! Simulation tick
//!
//! One call advances the match by one frame. Step order is fixed:
//! player controls, player motion and trail record, opponent replay,
//! opponent fire, player fire, contact and projectile motion, expiry.

use super::craft::Side;
use super::projectile::{Projectile, can_fire};
use super::state::{MatchEvent, MatchPhase, MatchState};

/// Control signals for a single tick (held state, read once per tick)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub accelerate: bool,
    pub fire: bool,
    /// Host exit command
    pub quit: bool,
}

/// Advance the match by one tick of `dt` seconds
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.quit {
        state.request_close();
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;
    let now = state.elapsed;
    let cfg = state.config;
    let arena = state.arena;

    // Player controls and motion
    let player = state.craft_mut(Side::Player);
    if input.turn_left {
        player.turn_left(cfg.turn_step);
    }
    if input.turn_right {
        player.turn_right(cfg.turn_step);
    }
    if input.accelerate {
        player.accelerate(cfg.thrust);
    }
    player.integrate_motion(&arena, cfg.damping);

    let player = state.player().clone();
    state.trail.record(&player, now);

    // Opponent flies the player's motion from `trail_lag` seconds ago
    if let Some(sample) = state.trail.pop_if_ready(now, cfg.trail_lag) {
        state.craft_mut(Side::Opponent).replay(&sample, &arena);
    }

    if now >= cfg.opponent_fire_delay && state.opponent().is_alive() {
        try_fire(state, Side::Opponent, now);
    }
    if input.fire && state.player().is_alive() {
        try_fire(state, Side::Player, now);
    }

    let alive_before = Side::ALL.map(|side| state.craft(side).is_alive());

    for side in Side::ALL {
        resolve_contacts(state, side);
    }

    for side in Side::ALL {
        state.projectiles_mut(side).retain(|p| !p.is_expired(now));
    }

    update_phase(state, alive_before);
}

/// Spawn a projectile for `side` if its gate allows
fn try_fire(state: &mut MatchState, side: Side, now: f64) {
    let cfg = state.config;
    if !can_fire(state.projectiles(side), now, cfg.early_refire) {
        return;
    }

    let id = state.next_entity_id();
    let shot = Projectile::new(
        id,
        state.craft(side),
        now,
        cfg.projectile_speed,
        cfg.projectile_lifetime,
    );
    log::debug!("{:?} fired #{} at {:.2}s", side, id, now);
    state.projectiles_mut(side).push(shot);
    state.events.push(MatchEvent::ShotFired {
        side,
        projectile_id: id,
    });
}

/// Test `side`'s projectiles against their target, then move them
fn resolve_contacts(state: &mut MatchState, side: Side) {
    let cfg = state.config;
    let arena = state.arena;
    let mut hits = Vec::new();

    let (shots, crafts) = state.shots_and_crafts(side);
    for shot in shots.iter_mut() {
        let target_side = crafts[shot.owner.index()].opponent;
        let target = &mut crafts[target_side.index()];

        // A spent projectile never hits twice. Wrecks still absorb shots; damage floors at 0.
        if !shot.contacted
            && shot.in_contact(target, &arena, cfg.contact_radius, cfg.wrap_aware_contact)
        {
            let lost = target.apply_damage(cfg.damage_per_hit);
            shot.register_contact();
            if lost > 0 {
                log::debug!("#{} hit {:?}, health now {}", shot.id, target_side, target.health);
                hits.push(MatchEvent::Hit {
                    target: target_side,
                    projectile_id: shot.id,
                    health: target.health,
                });
            }
        }

        shot.advance(&arena);
    }

    state.events.extend(hits);
}

/// Record deaths from this tick and settle the outcome
fn update_phase(state: &mut MatchState, alive_before: [bool; 2]) {
    for side in Side::ALL {
        if alive_before[side.index()] && !state.craft(side).is_alive() {
            state.events.push(MatchEvent::Defeated { side });
        }
    }

    // Terminal phases are sticky; only simultaneous deaths are mutual
    if state.phase == MatchPhase::Active {
        let phase = MatchPhase::from_alive(state.player().is_alive(), state.opponent().is_alive());
        if phase != state.phase {
            log::info!("Match over at {:.2}s: {:?}", state.elapsed, phase);
            state.phase = phase;
        }
    }
}
