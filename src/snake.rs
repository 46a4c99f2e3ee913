use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// One grid step in this direction, rows grow downwards
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn step(self, from: Coords) -> Coords {
        let (dx, dy) = self.delta();
        (from.0 + dx, from.1 + dy)
    }
}

/// Occupied cells, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    pub fn new(head: Coords, length: GridInt, heading: Direction) -> Self {
        let (dx, dy) = heading.delta();

        let body = (0..length.max(1))
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();
        Snake { body }
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[Coords]) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one cell");
        Snake { body: cells.iter().copied().collect() }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Coords) -> bool {
        self.body.contains(&cell)
    }

    /// Pushes a new head. Unless growing, drops the tail and returns the cell it left.
    pub fn advance(&mut self, new_head: Coords, grow: bool) -> Option<Coords> {
        self.body.push_front(new_head);

        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }
}
