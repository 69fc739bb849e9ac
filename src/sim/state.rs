//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; the tick mutates it and
//! nothing else does.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::spawn_food;
use super::grid::{Cell, Direction, Grid};
use super::snake::Snake;
use crate::settings::GameConfig;

/// Lifecycle phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Snake moves every tick
    Running,
    /// Frozen until pause is toggled again
    Paused,
    /// Round over, waiting for restart
    Ended,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Snake fills the board, nowhere left for food
    BoardCleared,
}

impl EndReason {
    pub fn is_win(self) -> bool {
        self == EndReason::BoardCleared
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub grid: Grid,
    pub snake: Snake,
    /// None only after the board has been cleared
    pub food: Option<Cell>,
    pub score: u32,
    /// Ticks per second
    pub speed: u32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    /// Running ticks in the current round
    pub time_ticks: u64,
    /// Rounds started, including the first
    pub round: u32,
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Start a new session with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let grid = Grid::new(config.grid_size);
        let snake = Self::start_snake(&grid, &config);
        let mut state = Self {
            speed: config.base_speed,
            config,
            grid,
            snake,
            food: None,
            score: 0,
            phase: GamePhase::Running,
            end_reason: None,
            time_ticks: 0,
            round: 1,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.food = spawn_food(&state.grid, &state.snake, &mut state.rng);
        state
    }

    /// Canonical start: head at the centre heading right, body trailing left
    fn start_snake(grid: &Grid, config: &GameConfig) -> Snake {
        Snake::new(
            grid.center(),
            Direction::Right,
            config.initial_length as usize,
        )
    }

    /// Reinitialise the round. The RNG stream carries on so rounds differ.
    pub fn reset(&mut self) {
        self.snake = Self::start_snake(&self.grid, &self.config);
        self.score = 0;
        self.speed = self.config.base_speed;
        self.phase = GamePhase::Running;
        self.end_reason = None;
        self.time_ticks = 0;
        self.round += 1;
        self.respawn_food();
    }

    /// Place food on a free cell; None once the board is full
    pub fn respawn_food(&mut self) -> Option<Cell> {
        self.food = spawn_food(&self.grid, &self.snake, &mut self.rng);
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_won(&self) -> bool {
        self.end_reason.is_some_and(EndReason::is_win)
    }

    /// Put food at an exact cell (scenario setup)
    pub fn set_food(&mut self, cell: Cell) {
        self.food = Some(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_canonical_start() {
        let state = GameState::new(GameConfig::default(), 1);
        let cells: Vec<Cell> = state.snake.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(12, 12), Cell::new(11, 12), Cell::new(10, 12)]
        );
        assert_eq!(state.heading(), Direction::Right);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
        let food = state.food.expect("food placed");
        assert!(state.grid.in_bounds(food));
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(GameConfig::default(), 99);
        let b = GameState::new(GameConfig::default(), 99);
        assert_eq!(a.food, b.food);
    }

    #[test]
    fn test_reset_reinitialises_round() {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.score = 9;
        state.speed = 12;
        state.phase = GamePhase::Ended;
        state.end_reason = Some(EndReason::Wall);
        state.reset();
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.end_reason, None);
        assert_eq!(state.round, 2);
    }

    #[test]
    fn test_config_is_sanitized() {
        let config = GameConfig {
            grid_size: 0,
            ..GameConfig::default()
        };
        let state = GameState::new(config, 0);
        assert!(state.grid.size() >= crate::consts::MIN_GRID_CELLS);
        assert!(state.snake.cells().all(|c| state.grid.in_bounds(c)));
    }
}
