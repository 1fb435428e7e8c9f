//! Demo pilot
//!
//! Stands in for a human at the controls when running headless. It holds a
//! random control combination for a random number of ticks, then picks
//! another. It only ever produces player input.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::TickInput;

/// Shortest and longest hold, in ticks
const MIN_HOLD_TICKS: u32 = 10;
const MAX_HOLD_TICKS: u32 = 90;

/// Seeded random control source
#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    current: TickInput,
    hold_ticks: u32,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: TickInput::default(),
            hold_ticks: 0,
        }
    }

    /// Controls for the next tick
    pub fn next_input(&mut self) -> TickInput {
        if self.hold_ticks == 0 {
            let turn = self.rng.random_range(0..3);
            self.current = TickInput {
                turn_left: turn == 1,
                turn_right: turn == 2,
                accelerate: self.rng.random_bool(0.6),
                fire: self.rng.random_bool(0.5),
                quit: false,
            };
            self.hold_ticks = self.rng.random_range(MIN_HOLD_TICKS..=MAX_HOLD_TICKS);
        }
        self.hold_ticks -= 1;
        self.current
    }
}
