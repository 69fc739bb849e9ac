//! Session glue
//!
//! Owns the simulation state and the high score record, and offers each
//! finished round to the record.

use crate::highscores::{HighScore, HighScoreStore};
use crate::settings::GameConfig;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Game<S: HighScoreStore> {
    state: GameState,
    high_score: HighScore<S>,
}

impl<S: HighScoreStore> Game<S> {
    /// New session; the high score is read from `store` once, here
    pub fn new(config: GameConfig, seed: u64, store: S) -> Self {
        Self {
            state: GameState::new(config, seed),
            high_score: HighScore::load(store),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }

    /// Run one tick and settle the high score if the round ended
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input);
        for event in &events {
            match *event {
                GameEvent::Ended { score, .. } => {
                    self.high_score.record(score);
                }
                GameEvent::SpeedUp { speed } => log::debug!("Speed up to {}", speed),
                GameEvent::Ate { score } => log::debug!("Ate food, score {}", score),
                _ => {}
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::{Cell, Direction, GamePhase, Snake};

    fn crash(game: &mut Game<MemoryStore>, score: u32) {
        let state = game.state_mut();
        state.snake = Snake::new(Cell::new(0, 12), Direction::Left, 3);
        state.set_food(Cell::new(5, 5));
        state.score = score;
        game.step(&TickInput::default());
        assert_eq!(game.state().phase, GamePhase::Ended);
    }

    #[test]
    fn test_wall_death_persists_new_record() {
        let mut game = Game::new(GameConfig::default(), 1, MemoryStore::with_value(4));
        assert_eq!(game.high_score(), 4);
        crash(&mut game, 7);
        assert_eq!(game.high_score(), 7);
        assert_eq!(game.store().value, Some(7));
    }

    #[test]
    fn test_lower_score_leaves_record() {
        let mut game = Game::new(GameConfig::default(), 1, MemoryStore::with_value(9));
        crash(&mut game, 7);
        assert_eq!(game.high_score(), 9);
        assert_eq!(game.store().writes, 0);
    }

    #[test]
    fn test_failed_write_keeps_session_alive() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut game = Game::new(GameConfig::default(), 1, store);
        crash(&mut game, 2);
        assert_eq!(game.high_score(), 2);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        game.step(&restart);
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.high_score(), 2);
    }

    #[test]
    fn test_record_checked_every_round() {
        let mut game = Game::new(GameConfig::default(), 1, MemoryStore::default());
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        crash(&mut game, 3);
        game.step(&restart);
        crash(&mut game, 5);
        game.step(&restart);
        crash(&mut game, 1);
        assert_eq!(game.high_score(), 5);
        assert_eq!(game.store().writes, 2);
    }
}
