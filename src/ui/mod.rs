//! Terminal presentation. Reads snapshots; never touches the simulation.

pub mod common;
pub mod scene;

pub use scene::{rasterize, render_game, Cell, Hud};
