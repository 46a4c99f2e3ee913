use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::config::{GameConfig, SpeedLevel};
use crate::engine::{GameState, TickOutcome};
use crate::input::Signal;
use crate::snake::Direction;
use crate::timer::RepeatingTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    Over,
}

/// What a control action changed, so the renderer knows how much to repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Ignored,
    /// Status, level or heading changed, board cells did not
    Updated,
    /// A fresh game replaced the board
    Reset,
    Quit,
}

/// Owns the game state and the timer that paces it.
pub struct LoopController<R: Rng> {
    config: GameConfig,
    level: SpeedLevel,
    status: GameStatus,
    state: GameState,
    timer: RepeatingTimer,
    rng: R,
}

impl<R: Rng> LoopController<R> {
    pub fn new(config: GameConfig, level: SpeedLevel, mut rng: R) -> Self {
        let state = GameState::new(&config, &mut rng);

        LoopController { config, level, status: GameStatus::Idle, state, timer: RepeatingTimer::new(), rng }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> SpeedLevel {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn final_score(&self) -> Option<u32> {
        if self.status == GameStatus::Over {
            Some(self.state.score)
        } else {
            None
        }
    }

    pub fn timer(&self) -> &RepeatingTimer {
        &self.timer
    }

    pub fn level_selectable(&self) -> bool {
        self.status != GameStatus::Running
    }

    pub fn game_over_visible(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// How long the owner may sleep before the next `poll` matters
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_fire(now)
    }

    /// Runs the game. Idle and finished games start over, paused ones resume.
    pub fn start(&mut self, now: Instant) -> Response {
        let response = match self.status {
            GameStatus::Running => return Response::Ignored,
            GameStatus::Paused => {
                info!("Resumed with score {}", self.state.score);
                Response::Updated
            }
            GameStatus::Idle | GameStatus::Over => {
                self.reset();
                info!("Started a new game at {} speed", self.level);
                Response::Reset
            }
        };

        self.timer.arm(self.level.interval(), now);
        self.status = GameStatus::Running;
        response
    }

    pub fn stop(&mut self) -> Response {
        if self.status != GameStatus::Running {
            return Response::Ignored;
        }

        self.timer.disarm();
        self.status = GameStatus::Paused;
        info!("Paused with score {}", self.state.score);
        Response::Updated
    }

    /// Starts a fresh game unless one is already running.
    pub fn restart(&mut self, now: Instant) -> Response {
        match self.status {
            GameStatus::Running => Response::Ignored,
            GameStatus::Paused => {
                self.status = GameStatus::Idle;
                self.start(now)
            }
            GameStatus::Idle | GameStatus::Over => self.start(now),
        }
    }

    pub fn toggle_pause(&mut self, now: Instant) -> Response {
        if self.status == GameStatus::Running {
            self.stop()
        } else {
            self.start(now)
        }
    }

    /// Selects a new pace. A running game keeps its board and picks the new
    /// interval up from `now`.
    pub fn set_level(&mut self, level: SpeedLevel, now: Instant) -> Response {
        if level == self.level {
            return Response::Ignored;
        }

        self.level = level;
        if self.status == GameStatus::Running {
            self.timer.arm(level.interval(), now);
        }

        info!("Speed level set to {}", level);
        Response::Updated
    }

    pub fn steer(&mut self, direction: Direction) -> Response {
        if self.status != GameStatus::Running {
            return Response::Ignored;
        }

        if self.state.steer(direction) {
            debug!("Steering {:?}", direction);
            Response::Updated
        } else {
            Response::Ignored
        }
    }

    pub fn handle(&mut self, signal: Signal, now: Instant) -> Response {
        match signal {
            Signal::Steer(direction) => self.steer(direction),
            Signal::Pause => self.toggle_pause(now),
            Signal::Start => self.start(now),
            Signal::Stop => self.stop(),
            Signal::Restart => self.restart(now),
            Signal::Level(level) if self.level_selectable() => self.set_level(level, now),
            Signal::Level(_) => Response::Ignored,
            Signal::Quit => Response::Quit,
        }
    }

    /// Ticks the game if the timer is due. A crash ends the game and disarms the timer.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.status != GameStatus::Running || !self.timer.fire_if_due(now) {
            return None;
        }

        let outcome = self.state.tick(&self.config, &mut self.rng);

        if let TickOutcome::Crashed(collision) = &outcome {
            self.timer.disarm();
            self.status = GameStatus::Over;
            info!("Game over ({:?} collision), final score {}", collision, self.state.score);
        } else if outcome.eaten() {
            debug!("Ate food, score {}", self.state.score);
        }

        Some(outcome)
    }

    fn reset(&mut self) {
        self.state = GameState::new(&self.config, &mut self.rng);
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
