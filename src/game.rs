use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use log::info;
use rand::rngs::ThreadRng;

use crate::Coords;
use crate::config::{GameConfig, SpeedLevel};
use crate::controller::{GameStatus, LoopController, Response};
use crate::engine::TickOutcome;
use crate::input::map_key;
use crate::snake::Direction::{self, *};
use crate::term::{ScreenPos, TermManager};

const SNAKE_BODY: &str = "██";
const FOOD: &str = "()";
const DEAD_SNAKE: &str = "XX";
const EMPTY: &str = "  ";

/// Status and help lines under the board
const FOOTER_LINES: u16 = 3;
/// Wakeup period while no timer is armed
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: [&str; 2] = [
    "Arrows/WASD steer, Space pause, Q quit",
    "Enter start, X stop, R restart, 1-3 speed",
];

pub struct SnakeGame {
    term: TermManager,
    controller: LoopController<ThreadRng>,
    origin: ScreenPos,
    board_width: u16,
    board_height: u16,
}

impl SnakeGame {
    pub fn new(config: GameConfig, level: SpeedLevel) -> Result<Self> {
        let term = TermManager::new()?;

        // Two columns per cell keeps the board roughly square
        let board_width = config.grid_size as u16 * 2 + 2;
        let board_height = config.grid_size as u16 + 2;
        let (w, h) = term.size();
        let needed_width = board_width.max(HELP.iter().map(|l| l.len() as u16).max().unwrap_or(0));
        if w < needed_width || h < board_height + FOOTER_LINES {
            bail!(
                "Terminal is {}x{}, a {} cell board needs at least {}x{}",
                w, h, config.grid_size, needed_width, board_height + FOOTER_LINES
            );
        }

        let origin = ((w - board_width) / 2, (h - board_height - FOOTER_LINES) / 2);
        let controller = LoopController::new(config, level, rand::thread_rng());

        Ok(SnakeGame { term, controller, origin, board_width, board_height })
    }

    /// Plays until the player quits. The terminal is restored even if drawing fails.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let result = self.play();
        let restored = self.term.restore();

        info!("Leaving with score {}", self.controller.score());
        result.and(restored)
    }

    fn play(&mut self) -> Result<()> {
        self.redraw()?;

        loop {
            let timeout = self.controller.time_until_tick(Instant::now()).unwrap_or(IDLE_POLL);

            if let Some(key) = self.term.read_key(timeout)? {
                if let Some(signal) = map_key(key) {
                    match self.controller.handle(signal, Instant::now()) {
                        Response::Quit => return Ok(()),
                        Response::Reset => self.redraw()?,
                        Response::Updated => self.refresh_overlay()?,
                        Response::Ignored => {}
                    }
                }
            }

            if let Some(outcome) = self.controller.poll(Instant::now()) {
                self.draw_outcome(&outcome)?;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn redraw(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.draw_box(self.origin, self.board_width, self.board_height)?;

        let state = self.controller.state();
        let food = state.food;
        let heading = state.heading;
        let cells: Vec<Coords> = state.snake.body().iter().copied().collect();

        self.print_cell(food, FOOD)?;
        for (i, cell) in cells.into_iter().enumerate() {
            let glyph = if i == 0 {head_glyph(heading)} else {SNAKE_BODY};
            self.print_cell(cell, glyph)?;
        }

        let help_y = self.origin.1 + self.board_height + 1;
        for (i, line) in HELP.iter().enumerate() {
            self.term.print_str_at((self.origin.0, help_y + i as u16), line)?;
        }

        self.refresh_overlay()
    }

    fn draw_outcome(&mut self, outcome: &TickOutcome) -> Result<()> {
        match outcome {
            TickOutcome::Moved { new_head, old_head, vacated, ate } => {
                let heading = self.controller.state().heading;
                self.print_cell(*new_head, head_glyph(heading))?;
                self.print_cell(*old_head, SNAKE_BODY)?;

                if let Some(tail) = vacated {
                    self.print_cell(*tail, EMPTY)?;
                }
                if *ate {
                    let food = self.controller.state().food;
                    self.print_cell(food, FOOD)?;
                }

                self.draw_status()?;
                self.term.flush()
            }
            TickOutcome::Crashed(_) => {
                let cells: Vec<Coords> = self.controller.state().snake.body().iter().copied().collect();
                for cell in cells {
                    self.print_cell(cell, DEAD_SNAKE)?;
                }
                self.refresh_overlay()
            }
        }
    }

    /// Status line plus whichever message box the current status calls for
    fn refresh_overlay(&mut self) -> Result<()> {
        self.term.hide_message()?;
        self.draw_status()?;

        if self.controller.game_over_visible() {
            let score = self.controller.final_score().unwrap_or(0);
            return self.term.show_message(&[
                "Game over!",
                &*format!("Score: {}", score),
                "",
                "Press R to play again,",
                "or Q to quit.",
            ]);
        }

        match self.controller.status() {
            GameStatus::Running | GameStatus::Over => self.term.flush(),
            GameStatus::Idle => self.term.show_message(&[
                "Arrow keys or WASD to move",
                "Space or Esc to pause",
                "1, 2, 3 to pick a speed",
                "",
                "Press Enter to begin",
            ]),
            GameStatus::Paused => self.term.show_message(&[
                "Paused",
                "Press Space to resume",
                "or Q to quit",
            ]),
        }
    }

    fn draw_status(&mut self) -> Result<()> {
        let status = match self.controller.status() {
            GameStatus::Idle => "ready",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Over => "game over",
        };
        let line = format!(
            "Score: {:<6} Level: {:<7} {}",
            self.controller.score(), self.controller.level(), status
        );
        let padded = format!("{:<width$}", line, width = self.board_width as usize);

        self.term.print_str_at((self.origin.0, self.origin.1 + self.board_height), &padded)
    }

    fn print_cell(&mut self, cell: Coords, glyph: &str) -> Result<()> {
        let pos = self.cell_to_screen(cell);
        self.term.print_str_at(pos, glyph)
    }

    fn cell_to_screen(&self, cell: Coords) -> ScreenPos {
        (self.origin.0 + 1 + cell.0 as u16 * 2, self.origin.1 + 1 + cell.1 as u16)
    }
}

fn head_glyph(heading: Direction) -> &'static str {
    match heading {
        Up => "^^",
        Down => "vv",
        Left => "<<",
        Right => ">>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_glyphs_are_cell_wide() {
        for dir in [Up, Down, Left, Right].iter() {
            assert_eq!(head_glyph(*dir).chars().count(), 2);
        }
        assert_eq!(SNAKE_BODY.chars().count(), 2);
        assert_eq!(FOOD.chars().count(), 2);
        assert_eq!(DEAD_SNAKE.chars().count(), 2);
        assert_eq!(EMPTY.chars().count(), 2);
    }
}
