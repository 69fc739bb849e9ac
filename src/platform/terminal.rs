//! Terminal lifetime and event polling

use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, terminal,
};

use crate::input::Intent;

/// Raw mode + alternate screen for as long as this lives
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Wait up to `timeout` for input, then drain everything already queued.
///
/// Never blocks longer than `timeout`; non-key events are skipped.
pub fn poll_intents(timeout: Duration, mut on_intent: impl FnMut(Intent)) -> io::Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(intent) = Intent::from_key(key) {
                on_intent(intent);
            }
        }
        if !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}
