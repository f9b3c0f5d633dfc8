//! Simulation configuration.

use crate::core::config::SessionConfig;

/// How simulated players choose their gesture each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Never raises the thumb.
    Idle,
    /// Raises the thumb with a fixed chance per tick.
    Random { flap_chance: f64 },
    /// Flaps to keep the agent above the lower edge of the next gap.
    Autopilot,
}

impl Policy {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(Policy::Idle),
            "random" => Some(Policy::Random { flap_chance: 0.08 }),
            "autopilot" => Some(Policy::Autopilot),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Idle => "idle",
            Policy::Random { .. } => "random",
            Policy::Autopilot => "autopilot",
        }
    }
}

/// Configuration for a batch of headless sessions.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-running session is stopped
    pub max_ticks_per_run: u64,

    pub policy: Policy,

    /// Session parameters; the seed is replaced per run
    pub session: SessionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 60 * 60 * 5, // five minutes at 60 ticks/s
            policy: Policy::Autopilot,
            session: SessionConfig::default(),
        }
    }
}
