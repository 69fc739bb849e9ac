//! Food placement

use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Uniform draws attempted before falling back to enumerating free cells
pub const MAX_REJECTION_DRAWS: u32 = 64;

/// Pick a uniformly random cell not occupied by `snake`.
///
/// Returns `None` when the snake covers the whole grid.
pub fn spawn_food<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    let size = grid.size() as i32;
    for _ in 0..MAX_REJECTION_DRAWS {
        let cell = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    // Dense board: choose from the exact free set
    grid.cells().filter(|c| !snake.occupies(*c)).choose(rng)
}
