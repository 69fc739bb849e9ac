//! Terminal rendering

pub mod frame;
pub mod terminal;

pub use frame::{BoardView, compose_frame, frame_area};
pub use terminal::TerminalRenderer;
