//! The per-tick game loop controller.
//!
//! A [`GameSession`] owns the agent, the pipes and the random source for
//! pipe placement. Each call to [`GameSession::tick`] runs one simulation
//! step and reports what happened; the renderer reads a [`SceneSnapshot`]
//! separately, so drawing never runs inside the update.

use crate::core::config::SessionConfig;
use crate::core::error::Result;
use crate::game::agent::Agent;
use crate::game::collision::detect_with_bounds;
use crate::game::geometry::Rect;
use crate::game::obstacles::ObstacleField;
use crate::gesture::input::GestureInput;
use crate::gesture::signal::GestureSignal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

/// Controller state. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SessionState {
    #[default]
    Running,
    GameOver,
}

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// State after the tick
    pub state: SessionState,
    /// The tick's signal was UP and the flap impulse was applied
    pub impulse_applied: bool,
    /// A new pipe pair entered at the right edge
    pub spawned_pair: bool,
    /// Pipe segments removed off the left edge
    pub pruned: usize,
    /// The agent hit a pipe (or a field edge) this tick
    pub collided: bool,
}

/// Immutable description of the scene for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub field: Rect,
    pub agent: Rect,
    /// Pipe segments, oldest first.
    pub obstacles: Vec<Rect>,
    pub terminal: bool,
    pub tick: u64,
    pub signal: GestureSignal,
    pub velocity: f64,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    agent: Agent,
    field: ObstacleField,
    config: SessionConfig,
    state: SessionState,
    ticks: u64,
    last_signal: GestureSignal,
    seed: u64,
    rng: StdRng,
}

impl GameSession {
    /// Validate the config and set up the agent and the first pipe pair.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let agent = Agent::spawn(&config);
        Self::with_agent(config, agent)
    }

    /// Like [`GameSession::new`], but starting from a given agent state
    /// instead of at rest in the field center.
    pub fn with_agent(config: SessionConfig, agent: Agent) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ObstacleField::initialize(&config, &mut rng);

        info!(
            seed,
            field_width = config.field_width,
            field_height = config.field_height,
            "session started"
        );

        Ok(Self {
            agent,
            field,
            config,
            state: SessionState::Running,
            ticks: 0,
            last_signal: GestureSignal::None,
            seed,
            rng,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Completed simulation ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The seed pipe placement was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn last_signal(&self) -> GestureSignal {
        self.last_signal
    }

    /// Acquire this tick's signal from `input`, then run the tick.
    pub fn step<I: GestureInput + ?Sized>(&mut self, input: &mut I) -> TickResult {
        if self.is_over() {
            return self.tick(GestureSignal::None);
        }
        let signal = input.next_signal();
        self.tick(signal)
    }

    /// Run one simulation tick. A finished session is left untouched.
    ///
    /// Gravity is accumulated before the flap impulse, so on an UP tick the
    /// agent moves by exactly `jump_force`.
    pub fn tick(&mut self, signal: GestureSignal) -> TickResult {
        if self.is_over() {
            return TickResult {
                state: SessionState::GameOver,
                ..Default::default()
            };
        }
        let mut result = TickResult::default();
        self.last_signal = signal;

        self.agent.apply_gravity(self.config.gravity);
        if signal == GestureSignal::Up {
            self.agent.apply_impulse(self.config.jump_force);
            result.impulse_applied = true;
        }
        self.agent.integrate();

        self.field.scroll(self.config.scroll_speed);
        result.spawned_pair = self.field.maybe_spawn(&self.config, &mut self.rng);
        result.pruned = self.field.prune(self.config.pipe_width);

        self.ticks += 1;

        let agent_box = self.agent.bounding_box(&self.config);
        if detect_with_bounds(&agent_box, self.field.rects(), &self.config) {
            self.state = SessionState::GameOver;
            result.collided = true;
            info!(
                ticks = self.ticks,
                y = self.agent.y(),
                pairs = self.field.pairs_spawned(),
                "game over"
            );
        }
        result.state = self.state;
        result
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            field: Rect::new(0.0, 0.0, self.config.field_width, self.config.field_height),
            agent: self.agent.bounding_box(&self.config),
            obstacles: self.field.rects().copied().collect(),
            terminal: self.is_over(),
            tick: self.ticks,
            signal: self.last_signal,
            velocity: self.agent.velocity(),
        }
    }
}
