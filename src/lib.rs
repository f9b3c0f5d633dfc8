//! Handflap - gesture-controlled side-scrolling arcade game.
//!
//! The library holds the whole simulation (agent physics, pipes, collision,
//! the per-tick controller) and the gesture pipeline that turns hand
//! landmarks into control signals. The binaries add a terminal driver and a
//! headless simulator on top.

pub mod core;
pub mod game;
pub mod gesture;
pub mod simulator;
pub mod ui;

pub use crate::core::{GameError, Result, SessionConfig};
pub use game::{GameSession, SceneSnapshot, SessionState, TickResult};
pub use gesture::{GestureInput, GestureSignal};
