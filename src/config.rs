use std::{fmt, time::Duration};

use clap::ValueEnum;

use crate::GridInt;

/// Named pace preset for the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeedLevel {
    Easy,
    Medium,
    Hard,
}

impl SpeedLevel {
    /// Time between two ticks at this level
    pub fn interval(self) -> Duration {
        let ms = match self {
            SpeedLevel::Easy => 150,
            SpeedLevel::Medium => 100,
            SpeedLevel::Hard => 70,
        };
        Duration::from_millis(ms)
    }

    pub fn name(self) -> &'static str {
        match self {
            SpeedLevel::Easy => "easy",
            SpeedLevel::Medium => "medium",
            SpeedLevel::Hard => "hard",
        }
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        SpeedLevel::Medium
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Board and scoring parameters for one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cells along each side of the square board
    pub grid_size: GridInt,
    /// Length of the snake after a (re)start
    pub initial_length: GridInt,
    /// Points awarded per food eaten
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_length: 3,
            food_reward: 10,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: GridInt) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.food_reward, 10);
    }

    #[test]
    fn test_custom_grid_size() {
        let config = GameConfig::new(12);
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.initial_length, 3);
    }

    #[test]
    fn test_level_intervals() {
        assert_eq!(SpeedLevel::Easy.interval(), Duration::from_millis(150));
        assert_eq!(SpeedLevel::Medium.interval(), Duration::from_millis(100));
        assert_eq!(SpeedLevel::Hard.interval(), Duration::from_millis(70));
    }

    #[test]
    fn test_level_names() {
        assert_eq!(SpeedLevel::default(), SpeedLevel::Medium);
        assert_eq!(SpeedLevel::Hard.to_string(), "hard");
    }
}
