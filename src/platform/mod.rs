//! Platform abstraction layer
//!
//! Handles the native terminal:
//! - Raw mode / alternate screen lifetime
//! - Non-blocking input events
//! - Tick pacing

pub mod terminal;
pub mod time;

pub use terminal::{TerminalGuard, poll_intents};
pub use time::{TickClock, tick_period};
