//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::spawn_food;
pub use grid::{Cell, Direction, Grid};
pub use snake::Snake;
pub use state::{EndReason, GamePhase, GameState};
pub use tick::{GameEvent, TickInput, resolve_direction, tick};
