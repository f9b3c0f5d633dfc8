// Tick and timing
pub const TICKS_PER_SECOND: u64 = 60;
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS, paced by the driver
pub const INPUT_POLL_MS: u64 = 2;

// Field
pub const DEFAULT_FIELD_WIDTH: f64 = 600.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 800.0;

// Agent physics (field units per tick)
pub const DEFAULT_GRAVITY: f64 = 0.5;
pub const DEFAULT_JUMP_FORCE: f64 = -10.0;
pub const DEFAULT_AGENT_X: f64 = 50.0;
pub const DEFAULT_AGENT_WIDTH: f64 = 40.0;
pub const DEFAULT_AGENT_HEIGHT: f64 = 40.0;

// Pipes
pub const DEFAULT_PIPE_WIDTH: f64 = 50.0;
pub const DEFAULT_PIPE_GAP: f64 = 200.0;
pub const DEFAULT_PIPE_INTERVAL: f64 = 200.0;
pub const DEFAULT_PIPE_MIN_MARGIN: f64 = 100.0;
pub const DEFAULT_SCROLL_SPEED: f64 = 1.0;

// Gesture smoothing (1 = honor every raw signal)
pub const DEFAULT_SMOOTHING_WINDOW: usize = 1;
pub const MAX_SMOOTHING_WINDOW: usize = 15;

// Files under ~/.handflap/
pub const APP_DIR_NAME: &str = ".handflap";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "handflap.log";
pub const LOG_LEVEL_ENV_VAR: &str = "HANDFLAP_LOG";
