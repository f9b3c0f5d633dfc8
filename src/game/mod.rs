//! Game simulation: the agent, the pipes, collisions and the tick loop.

pub mod agent;
pub mod collision;
pub mod geometry;
pub mod obstacles;
pub mod session;

pub use agent::Agent;
pub use collision::{detect, detect_with_bounds};
pub use geometry::Rect;
pub use obstacles::{Obstacle, ObstacleField, Segment};
pub use session::{GameSession, SceneSnapshot, SessionState, TickResult};
