//! Plays headless sessions with a scripted policy.

use super::config::SimConfig;
use super::policy::decide;
use super::report::{RunStats, SimReport};
use crate::core::config::SessionConfig;
use crate::core::error::Result;
use crate::game::session::GameSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Run every configured session and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    config.session.validate()?;

    let mut runs = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let run_seed = config.seed.map(|seed| seed.wrapping_add(run_idx as u64));
        let stats = simulate_single_run(config, run_seed)?;
        debug!(run = run_idx, ticks = stats.ticks_survived, "run finished");
        runs.push(stats);
    }

    Ok(SimReport::from_runs(config.policy.name(), runs))
}

/// Play one session until it ends or hits the tick limit.
pub fn simulate_single_run(config: &SimConfig, seed: Option<u64>) -> Result<RunStats> {
    let session_config = SessionConfig {
        seed,
        ..config.session.clone()
    };
    let mut session = GameSession::new(session_config)?;
    // Policy randomness is independent of pipe placement but tied to the same seed
    let mut policy_rng = StdRng::seed_from_u64(session.seed() ^ 0x9E37_79B9_7F4A_7C15);

    let mut flaps = 0;
    while !session.is_over() && session.ticks() < config.max_ticks_per_run {
        let signal = decide(config.policy, &session, &mut policy_rng);
        if session.tick(signal).impulse_applied {
            flaps += 1;
        }
    }

    Ok(RunStats {
        ticks_survived: session.ticks(),
        pairs_spawned: session.field().pairs_spawned(),
        flaps,
        timed_out: !session.is_over(),
    })
}
