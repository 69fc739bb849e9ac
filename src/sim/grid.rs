//! Discrete grid geometry
//!
//! Cells are integer coordinates with y growing downward. A cell may hold an
//! off-grid coordinate (a candidate head about to hit a wall); validity is
//! always decided by [`Grid::in_bounds`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A unit grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        Self::from(IVec2::from(self) + dir.offset())
    }
}

impl From<IVec2> for Cell {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Cell> for IVec2 {
    fn from(c: Cell) -> Self {
        IVec2::new(c.x, c.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset in screen coordinates
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn is_reversal_of(self, other: Direction) -> bool {
        self == other.opposite()
    }
}

/// Fixed N×N playfield, no wraparound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        Self {
            size: size.min(i32::MAX as u32) as i32,
        }
    }

    pub fn size(&self) -> u32 {
        self.size as u32
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    /// All cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::consts::GRID_CELLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_have_no_wraparound() {
        let grid = Grid::new(24);
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(23, 23)));
        assert!(!grid.in_bounds(Cell::new(-1, 12)));
        assert!(!grid.in_bounds(Cell::new(24, 12)));
        assert!(!grid.in_bounds(Cell::new(12, -1)));
        assert!(!grid.in_bounds(Cell::new(12, 24)));
    }

    #[test]
    fn test_step_and_opposite() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.opposite().is_reversal_of(d));
            assert_eq!(c.step(d).step(d.opposite()), c);
        }
    }

    #[test]
    fn test_cells_cover_grid_once() {
        let grid = Grid::new(5);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[6], Cell::new(1, 1));
        assert!(cells.iter().all(|c| grid.in_bounds(*c)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(24).center(), Cell::new(12, 12));
    }
}
