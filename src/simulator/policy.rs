//! Scripted players for headless runs.

use super::config::Policy;
use crate::game::session::GameSession;
use crate::gesture::signal::GestureSignal;
use rand::Rng;

/// Distance the autopilot keeps between the agent and the lower gap edge.
pub const AUTOPILOT_MARGIN: f64 = 10.0;

/// Choose this tick's gesture for `session`.
pub fn decide<R: Rng>(policy: Policy, session: &GameSession, rng: &mut R) -> GestureSignal {
    match policy {
        Policy::Idle => GestureSignal::None,
        Policy::Random { flap_chance } => {
            if rng.gen_bool(flap_chance.clamp(0.0, 1.0)) {
                GestureSignal::Up
            } else {
                GestureSignal::Down
            }
        }
        Policy::Autopilot => autopilot(session),
    }
}

/// Flap when the agent would sink below the next gap's lower edge next tick.
fn autopilot(session: &GameSession) -> GestureSignal {
    let config = session.config();
    let agent = session.agent().bounding_box(config);
    let target_bottom = match session.field().next_pair_ahead_of(agent.x) {
        Some((_, bottom)) => bottom.y - AUTOPILOT_MARGIN,
        None => config.field_height * 0.6,
    };
    let predicted_bottom = agent.bottom() + session.agent().velocity() + config.gravity;
    if predicted_bottom > target_bottom {
        GestureSignal::Up
    } else {
        GestureSignal::Down
    }
}
