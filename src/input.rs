//! Input intents and buffering
//!
//! Key events arrive any number of times between ticks. They are folded into
//! an [`InputBuffer`] and drained once per tick into a [`TickInput`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::{Direction, TickInput};

/// A player request, independent of the key that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Restart,
    Quit,
}

impl Intent {
    /// Map a key press; releases and unbound keys give None
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Intent::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::MoveUp),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::MoveDown),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                Some(Intent::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Intents gathered since the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    direction: Option<Direction>,
    pause: bool,
    restart: bool,
    quit: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one intent in. A turn that reverses `heading` is dropped so an
    /// earlier valid turn survives it; otherwise the latest turn wins.
    pub fn push(&mut self, intent: Intent, heading: Direction) {
        if let Some(dir) = intent.direction() {
            if !dir.is_reversal_of(heading) {
                self.direction = Some(dir);
            }
            return;
        }
        match intent {
            Intent::TogglePause => self.pause = !self.pause,
            Intent::Restart => self.restart = true,
            Intent::Quit => self.quit = true,
            _ => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain into the input for the next tick
    pub fn take(&mut self) -> TickInput {
        TickInput {
            direction: self.direction.take(),
            pause: std::mem::take(&mut self.pause),
            restart: std::mem::take(&mut self.restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dual_bindings() {
        assert_eq!(Intent::from_key(press(KeyCode::Up)), Some(Intent::MoveUp));
        assert_eq!(Intent::from_key(press(KeyCode::Char('w'))), Some(Intent::MoveUp));
        assert_eq!(Intent::from_key(press(KeyCode::Char('A'))), Some(Intent::MoveLeft));
        assert_eq!(Intent::from_key(press(KeyCode::Right)), Some(Intent::MoveRight));
        assert_eq!(Intent::from_key(press(KeyCode::Char('s'))), Some(Intent::MoveDown));
        assert_eq!(Intent::from_key(press(KeyCode::Char('p'))), Some(Intent::TogglePause));
        assert_eq!(Intent::from_key(press(KeyCode::Char('r'))), Some(Intent::Restart));
        assert_eq!(Intent::from_key(press(KeyCode::Esc)), Some(Intent::Quit));
        assert_eq!(
            Intent::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_unknown_and_release_ignored() {
        assert_eq!(Intent::from_key(press(KeyCode::Char('x'))), None);
        assert_eq!(Intent::from_key(press(KeyCode::Tab)), None);
        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(Intent::from_key(release), None);
    }

    #[test]
    fn test_latest_turn_wins() {
        let mut buf = InputBuffer::new();
        buf.push(Intent::MoveUp, Direction::Right);
        buf.push(Intent::MoveDown, Direction::Right);
        assert_eq!(buf.take().direction, Some(Direction::Down));
        assert_eq!(buf.take().direction, None);
    }

    #[test]
    fn test_reversal_does_not_clobber_valid_turn() {
        let mut buf = InputBuffer::new();
        buf.push(Intent::MoveUp, Direction::Right);
        buf.push(Intent::MoveLeft, Direction::Right);
        assert_eq!(buf.take().direction, Some(Direction::Up));
    }

    #[test]
    fn test_pause_presses_toggle() {
        let mut buf = InputBuffer::new();
        buf.push(Intent::TogglePause, Direction::Right);
        buf.push(Intent::TogglePause, Direction::Right);
        assert!(!buf.take().pause);

        buf.push(Intent::TogglePause, Direction::Right);
        assert!(buf.take().pause);
    }

    #[test]
    fn test_restart_and_quit_latch() {
        let mut buf = InputBuffer::new();
        buf.push(Intent::Restart, Direction::Up);
        buf.push(Intent::Restart, Direction::Up);
        buf.push(Intent::Quit, Direction::Up);
        assert!(buf.quit_requested());
        let input = buf.take();
        assert!(input.restart);
        assert!(!buf.take().restart);
    }
}
