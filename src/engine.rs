use log::trace;
use rand::Rng;

use crate::config::GameConfig;
use crate::food::place_food;
use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// What a single tick did to the board
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Moved { new_head: Coords, old_head: Coords, vacated: Option<Coords>, ate: bool },
    Crashed(Collision),
}

impl TickOutcome {
    pub fn eaten(&self) -> bool {
        matches!(self, TickOutcome::Moved { ate: true, .. })
    }

    pub fn collided(&self) -> bool {
        matches!(self, TickOutcome::Crashed(_))
    }
}

/// Everything that changes while a game is played
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Heading applied on the last tick
    pub heading: Direction,
    /// Heading the next tick will apply
    pub pending: Direction,
    pub food: Coords,
    pub score: u32,
    pub grid_size: GridInt,
}

impl GameState {
    /// Fresh game: snake centred on the board heading right, score zero.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let center = (config.grid_size / 2, config.grid_size / 2);
        let snake = Snake::new(center, config.initial_length, Direction::Right);
        let food = place_food(&snake, config.grid_size, rng);

        GameState {
            snake,
            heading: Direction::Right,
            pending: Direction::Right,
            food,
            score: 0,
            grid_size: config.grid_size,
        }
    }

    pub fn in_bounds(&self, cell: Coords) -> bool {
        (0..self.grid_size).contains(&cell.0) && (0..self.grid_size).contains(&cell.1)
    }

    /// Requests a heading for the next tick. Reversals of the current heading are dropped.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.heading) {
            return false;
        }

        self.pending = direction;
        true
    }

    /// Advances the snake by one cell.
    ///
    /// The body check runs against the whole snake before its tail moves, so
    /// turning into the cell the tail is about to leave counts as a crash.
    pub fn tick<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> TickOutcome {
        self.heading = self.pending;

        let old_head = self.snake.head();
        let new_head = self.heading.step(old_head);

        if !self.in_bounds(new_head) {
            return TickOutcome::Crashed(Collision::Wall);
        }
        if self.snake.contains(new_head) {
            return TickOutcome::Crashed(Collision::Body);
        }

        let ate = new_head == self.food;
        let vacated = self.snake.advance(new_head, ate);

        if ate {
            self.score += config.food_reward;
            self.food = place_food(&self.snake, self.grid_size, rng);
        }

        trace!("Head moved {:?} -> {:?}", old_head, new_head);
        TickOutcome::Moved { new_head, old_head, vacated, ate }
    }
}
