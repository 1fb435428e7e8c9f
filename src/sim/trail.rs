//! Player motion history
//!
//! Every tick the player's post-integration velocity and heading are queued.
//! Samples are released oldest-first once they are older than the lag, and
//! the opponent flies them.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::craft::Craft;

/// One recorded tick of player motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub vel: Vec2,
    pub heading: f32,
    /// Match time (seconds) when recorded
    pub timestamp: f64,
}

/// FIFO of player samples awaiting replay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailRecorder {
    samples: VecDeque<TrailSample>,
}

impl TrailRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the craft's current kinematics
    pub fn record(&mut self, craft: &Craft, now: f64) {
        self.samples.push_back(TrailSample {
            vel: craft.vel,
            heading: craft.heading,
            timestamp: now,
        });
    }

    /// Release the oldest sample if it is strictly older than `lag` seconds
    pub fn pop_if_ready(&mut self, now: f64, lag: f64) -> Option<TrailSample> {
        match self.samples.front() {
            Some(head) if head.timestamp < now - lag => self.samples.pop_front(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest pending sample
    pub fn peek(&self) -> Option<&TrailSample> {
        self.samples.front()
    }
}
