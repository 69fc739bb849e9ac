//! Terminal output through a ratatui backend

use std::io;

use ratatui::{Terminal, backend::Backend};

use super::frame::BoardView;
use crate::sim::GameState;

/// Draws the board on any ratatui backend, normally crossterm on stdout
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, state: &GameState, high_score: u32) -> io::Result<()> {
        self.terminal.draw(|frame| {
            frame.render_widget(BoardView::new(state, high_score), frame.area());
        })?;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}
