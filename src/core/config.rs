//! Session parameters.
//!
//! Every tunable of a game session lives in [`SessionConfig`]. Values are
//! fixed for the lifetime of a session and checked once by
//! [`SessionConfig::validate`]; the per-tick code assumes a valid config.

use crate::core::constants::*;
use crate::core::error::{GameError, Result};
use crate::core::paths::default_config_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Width of the play field in field units.
    pub field_width: f64,
    /// Height of the play field in field units. y grows downward.
    pub field_height: f64,
    /// Velocity added to the agent every tick (positive = downward).
    pub gravity: f64,
    /// Velocity the agent is set to on an UP gesture. Must be negative.
    pub jump_force: f64,
    /// Fixed horizontal position of the agent's left edge.
    pub agent_x: f64,
    pub agent_width: f64,
    pub agent_height: f64,
    pub pipe_width: f64,
    /// Vertical opening between the top and bottom segment of a pair.
    pub pipe_gap: f64,
    /// Horizontal distance the newest pair travels before the next one spawns.
    pub pipe_interval: f64,
    /// Minimum height of either pipe segment.
    pub min_margin: f64,
    /// Horizontal pipe movement per tick.
    pub scroll_speed: f64,
    /// Treat leaving the field through the ceiling or floor as a crash.
    pub bounds_are_lethal: bool,
    /// Number of raw gesture signals a new signal needs a majority of.
    pub smoothing_window: usize,
    /// Random seed for pipe placement (None = random)
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            jump_force: DEFAULT_JUMP_FORCE,
            agent_x: DEFAULT_AGENT_X,
            agent_width: DEFAULT_AGENT_WIDTH,
            agent_height: DEFAULT_AGENT_HEIGHT,
            pipe_width: DEFAULT_PIPE_WIDTH,
            pipe_gap: DEFAULT_PIPE_GAP,
            pipe_interval: DEFAULT_PIPE_INTERVAL,
            min_margin: DEFAULT_PIPE_MIN_MARGIN,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            bounds_are_lethal: true,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Vertical start position of the agent: field center.
    pub fn start_y(&self) -> f64 {
        self.field_height / 2.0
    }

    /// Smallest and largest top-segment height a spawned pair may draw.
    pub fn top_height_range(&self) -> (f64, f64) {
        (
            self.min_margin,
            self.field_height - self.pipe_gap - self.min_margin,
        )
    }

    /// Reject parameter combinations the simulation cannot honor.
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: impl Into<String>) -> Result<()> {
            Err(GameError::InvalidConfig(msg.into()))
        }

        let finite = [
            self.field_width,
            self.field_height,
            self.gravity,
            self.jump_force,
            self.agent_x,
            self.agent_width,
            self.agent_height,
            self.pipe_width,
            self.pipe_gap,
            self.pipe_interval,
            self.min_margin,
            self.scroll_speed,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("all numeric parameters must be finite");
        }

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid("field dimensions must be positive");
        }
        if self.agent_width <= 0.0 || self.agent_height <= 0.0 {
            return invalid("agent size must be positive");
        }
        if self.agent_height >= self.field_height {
            return invalid("agent must be shorter than the field");
        }
        if self.agent_x < 0.0 || self.agent_x + self.agent_width > self.field_width {
            return invalid(format!(
                "agent column [{}, {}] must lie inside the field width ({})",
                self.agent_x,
                self.agent_x + self.agent_width,
                self.field_width
            ));
        }
        if self.pipe_width <= 0.0 || self.pipe_gap <= 0.0 {
            return invalid("pipe width and gap must be positive");
        }
        if self.pipe_gap >= self.field_height {
            return invalid(format!(
                "pipe_gap ({}) must be smaller than field_height ({})",
                self.pipe_gap, self.field_height
            ));
        }
        if self.min_margin < 0.0 {
            return invalid("min_margin must not be negative");
        }
        let (lo, hi) = self.top_height_range();
        if lo.ceil() > hi.floor() {
            return invalid(format!(
                "pipe_gap ({}) plus two margins ({}) does not fit in field_height ({})",
                self.pipe_gap, self.min_margin, self.field_height
            ));
        }
        if self.scroll_speed <= 0.0 {
            return invalid("scroll_speed must be positive");
        }
        if self.pipe_interval <= 0.0 || self.pipe_interval > self.field_width {
            return invalid("pipe_interval must be in (0, field_width]");
        }
        if self.gravity < 0.0 {
            return invalid("gravity must not be negative");
        }
        if self.jump_force >= 0.0 {
            return invalid("jump_force must be negative (upward)");
        }
        if self.smoothing_window == 0 || self.smoothing_window > MAX_SMOOTHING_WINDOW {
            return invalid(format!(
                "smoothing_window must be between 1 and {}",
                MAX_SMOOTHING_WINDOW
            ));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load an explicit config file, or ~/.handflap/config.json if present,
    /// or the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Ok(default_path) if default_path.exists() => Self::load(&default_path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: SessionConfig) {
        assert!(
            matches!(config.validate(), Err(GameError::InvalidConfig(_))),
            "expected invalid config: {:?}",
            config
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_classic_tuning() {
        let config = SessionConfig::default();
        assert_eq!(config.field_width, 600.0);
        assert_eq!(config.field_height, 800.0);
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.jump_force, -10.0);
        assert_eq!(config.pipe_gap, 200.0);
        assert_eq!(config.start_y(), 400.0);
        assert_eq!(config.top_height_range(), (100.0, 500.0));
    }

    #[test]
    fn test_gap_as_tall_as_field_rejected() {
        assert_invalid(SessionConfig {
            pipe_gap: 800.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_gap_plus_margins_too_tall_rejected() {
        assert_invalid(SessionConfig {
            pipe_gap: 700.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_agent_outside_field_rejected() {
        assert_invalid(SessionConfig {
            agent_x: 1500.0,
            ..Default::default()
        });
        assert_invalid(SessionConfig {
            agent_x: -1.0,
            ..Default::default()
        });
        // Right edge past the field
        assert_invalid(SessionConfig {
            agent_x: 570.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_agent_flush_with_right_edge_is_valid() {
        let config = SessionConfig {
            agent_x: 560.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_speed_rejected() {
        assert_invalid(SessionConfig {
            scroll_speed: -1.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_positive_jump_rejected() {
        assert_invalid(SessionConfig {
            jump_force: 5.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_interval_wider_than_field_rejected() {
        assert_invalid(SessionConfig {
            pipe_interval: 601.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_zero_smoothing_window_rejected() {
        assert_invalid(SessionConfig {
            smoothing_window: 0,
            ..Default::default()
        });
    }

    #[test]
    fn test_nan_rejected() {
        assert_invalid(SessionConfig {
            gravity: f64::NAN,
            ..Default::default()
        });
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SessionConfig::from_json(r#"{ "gravity": 0.25, "seed": 7 }"#)
            .expect("partial config should parse");
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.field_height, 800.0);
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        let result = SessionConfig::from_json(r#"{ "pipe_gap": 900 }"#);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = SessionConfig::from_json("{ not json");
        assert!(matches!(result, Err(GameError::ConfigParse(_))));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let result =
            SessionConfig::load_or_default(Some(Path::new("/nonexistent/handflap_config.json")));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
