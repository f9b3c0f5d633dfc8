//! Collision detection between the agent and the pipes.

use crate::core::config::SessionConfig;
use crate::game::geometry::Rect;

/// True if `agent` overlaps any obstacle. Touching edges do not count.
pub fn detect<'a>(agent: &Rect, obstacles: impl IntoIterator<Item = &'a Rect>) -> bool {
    obstacles.into_iter().any(|obstacle| agent.intersects(obstacle))
}

/// Static rectangles just above and just below the field, used as
/// implicit obstacles when leaving the field is fatal.
pub fn field_bounds(config: &SessionConfig) -> [Rect; 2] {
    let (w, h) = (config.field_width, config.field_height);
    // Three field widths wide so the agent column is covered wherever it sits
    let ceiling = Rect::new(-w, -h, 3.0 * w, h);
    let floor = Rect::new(-w, h, 3.0 * w, h);
    [ceiling, floor]
}

/// Check the agent against the pipes and, if configured, the field edges.
pub fn detect_with_bounds<'a>(
    agent: &Rect,
    obstacles: impl IntoIterator<Item = &'a Rect>,
    config: &SessionConfig,
) -> bool {
    if detect(agent, obstacles) {
        return true;
    }
    if !config.bounds_are_lethal {
        return false;
    }
    // Outside the field entirely (e.g. launched past a bound in one tick)
    if agent.bottom() <= -config.field_height || agent.y >= 2.0 * config.field_height {
        return true;
    }
    detect(agent, field_bounds(config).iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_pair() -> [Rect; 2] {
        // Gap from y=300 to y=500 at x=40..90
        [
            Rect::new(40.0, 0.0, 50.0, 300.0),
            Rect::new(40.0, 500.0, 50.0, 300.0),
        ]
    }

    #[test]
    fn test_agent_inside_gap_is_safe() {
        let agent = Rect::new(50.0, 350.0, 40.0, 40.0);
        assert!(!detect(&agent, pipe_pair().iter()));
    }

    #[test]
    fn test_agent_touching_gap_edges_is_safe() {
        let top_touch = Rect::new(50.0, 300.0, 40.0, 40.0);
        let bottom_touch = Rect::new(50.0, 460.0, 40.0, 40.0);
        assert!(!detect(&top_touch, pipe_pair().iter()));
        assert!(!detect(&bottom_touch, pipe_pair().iter()));
    }

    #[test]
    fn test_one_unit_overlap_collides() {
        let into_top = Rect::new(50.0, 299.0, 40.0, 40.0);
        let into_bottom = Rect::new(50.0, 461.0, 40.0, 40.0);
        assert!(detect(&into_top, pipe_pair().iter()));
        assert!(detect(&into_bottom, pipe_pair().iter()));
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        let agent = Rect::new(50.0, 350.0, 40.0, 40.0);
        assert!(!detect(&agent, std::iter::empty()));
    }

    #[test]
    fn test_matches_overlap_formula() {
        let agent = Rect::new(50.0, 100.0, 40.0, 40.0);
        for dx in [-60.0, -50.0, -10.0, 0.0, 30.0, 40.0, 45.0] {
            for dy in [-60.0, -40.0, -1.0, 0.0, 39.0, 40.0, 80.0] {
                let b = Rect::new(agent.x + dx, agent.y + dy, 50.0, 40.0);
                let expected = agent.x < b.x + b.w
                    && agent.x + agent.w > b.x
                    && agent.y < b.y + b.h
                    && agent.y + agent.h > b.y;
                assert_eq!(detect(&agent, [b].iter()), expected, "dx={} dy={}", dx, dy);
            }
        }
    }

    #[test]
    fn test_field_edges_lethal_by_default() {
        let config = SessionConfig::default();
        let above = Rect::new(50.0, -1.0, 40.0, 40.0);
        let below = Rect::new(50.0, 761.0, 40.0, 40.0);
        assert!(detect_with_bounds(&above, std::iter::empty(), &config));
        assert!(detect_with_bounds(&below, std::iter::empty(), &config));
    }

    #[test]
    fn test_touching_field_edges_is_safe() {
        let config = SessionConfig::default();
        let at_ceiling = Rect::new(50.0, 0.0, 40.0, 40.0);
        let at_floor = Rect::new(50.0, 760.0, 40.0, 40.0);
        assert!(!detect_with_bounds(&at_ceiling, std::iter::empty(), &config));
        assert!(!detect_with_bounds(&at_floor, std::iter::empty(), &config));
    }

    #[test]
    fn test_far_outside_field_is_lethal() {
        let config = SessionConfig::default();
        let far_below = Rect::new(50.0, 5000.0, 40.0, 40.0);
        assert!(detect_with_bounds(&far_below, std::iter::empty(), &config));
    }

    #[test]
    fn test_field_edges_ignored_when_disabled() {
        let config = SessionConfig {
            bounds_are_lethal: false,
            ..Default::default()
        };
        let below = Rect::new(50.0, 900.0, 40.0, 40.0);
        assert!(!detect_with_bounds(&below, std::iter::empty(), &config));
    }
}
