//! Headless batch play for tuning session parameters.
//!
//! Plays many seeded sessions with a scripted policy and reports how long
//! the agent survived. Uses [`GameSession`](crate::game::GameSession)
//! directly, so results match interactive play tick for tick.

mod config;
mod policy;
mod report;
mod runner;

pub use config::{Policy, SimConfig};
pub use policy::decide;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
