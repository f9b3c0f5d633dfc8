//! The bird: vertical position and velocity under gravity and flap impulses.

use crate::core::config::SessionConfig;
use crate::game::geometry::Rect;

/// The player-controlled agent. Only its vertical motion is simulated;
/// the horizontal position is fixed by the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    y: f64,
    velocity: f64,
}

impl Agent {
    /// Agent at rest with its top edge at `y`.
    pub fn new(y: f64) -> Self {
        Self::with_velocity(y, 0.0)
    }

    pub fn with_velocity(y: f64, velocity: f64) -> Self {
        Self { y, velocity }
    }

    /// Agent at the vertical center of the field, at rest.
    pub fn spawn(config: &SessionConfig) -> Self {
        Self::new(config.start_y())
    }

    /// Top edge of the bounding box.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Field units per tick, positive = downward.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn apply_gravity(&mut self, gravity: f64) {
        self.velocity += gravity;
    }

    /// Override velocity with the flap impulse. Not additive.
    pub fn apply_impulse(&mut self, jump_force: f64) {
        self.velocity = jump_force;
    }

    pub fn integrate(&mut self) {
        self.y += self.velocity;
    }

    pub fn bounding_box(&self, config: &SessionConfig) -> Rect {
        Rect::new(config.agent_x, self.y, config.agent_width, config.agent_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_at_field_center() {
        let agent = Agent::spawn(&SessionConfig::default());
        assert_eq!(agent.y(), 400.0);
        assert_eq!(agent.velocity(), 0.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut agent = Agent::new(0.0);
        agent.apply_gravity(0.5);
        agent.apply_gravity(0.5);
        assert_eq!(agent.velocity(), 1.0);
        assert_eq!(agent.y(), 0.0); // Position only moves on integrate
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        let mut agent = Agent::with_velocity(100.0, 7.5);
        agent.apply_impulse(-10.0);
        assert_eq!(agent.velocity(), -10.0);
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut agent = Agent::with_velocity(100.0, -3.0);
        agent.integrate();
        assert_eq!(agent.y(), 97.0);
    }

    #[test]
    fn test_bounding_box_uses_config_size() {
        let config = SessionConfig::default();
        let agent = Agent::new(123.0);
        assert_eq!(
            agent.bounding_box(&config),
            Rect::new(50.0, 123.0, 40.0, 40.0)
        );
    }
}
