//! The snake body
//!
//! Head first, tail last. The body never holds the same cell twice; the tick
//! checks collisions before calling [`Snake::advance`] so a colliding move is
//! never applied.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
    /// Direction used by the most recent advance (or the spawn heading)
    heading: Direction,
}

impl Snake {
    /// Build a straight snake of `len` cells with the head at `head`, the body
    /// trailing away from `heading`. `len` is raised to 1 if zero.
    pub fn new(head: Cell, heading: Direction, len: usize) -> Self {
        let back = heading.opposite();
        let mut body = VecDeque::with_capacity(len.max(1));
        let mut cell = head;
        for _ in 0..len.max(1) {
            body.push_back(cell);
            cell = cell.step(back);
        }
        Self { body, heading }
    }

    #[inline]
    pub fn head(&self) -> Cell {
        // body is never empty
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Would moving the head onto `cell` hit the body?
    ///
    /// When the snake is not growing, the tail leaves its cell this same tick,
    /// so following the tail is legal.
    pub fn would_collide(&self, cell: Cell, grew: bool) -> bool {
        let checked = if grew { self.len() } else { self.len() - 1 };
        self.body.iter().take(checked).any(|c| *c == cell)
    }

    /// Move one step in `direction`, keeping the tail when `grew`.
    ///
    /// Returns the new head and whether it collided with the pre-move body.
    pub fn advance(&mut self, direction: Direction, grew: bool) -> (Cell, bool) {
        let new_head = self.head().step(direction);
        let collided = self.would_collide(new_head, grew);
        self.body.push_front(new_head);
        if !grew {
            self.body.pop_back();
        }
        self.heading = direction;
        (new_head, collided)
    }
}
