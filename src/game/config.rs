use serde::{Deserialize, Serialize};

/// Board geometry and pacing constants
///
/// The board is centered on the origin: legal coordinates span
/// `[-width/2, width/2]` on the x axis and `[-height/2, height/2]` on the
/// y axis, and every position is a multiple of `grid_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in virtual units
    pub width: i32,
    /// Board height in virtual units
    pub height: i32,
    /// Edge length of one grid cell
    pub grid_size: i32,
    /// Snake length at spawn
    pub start_length: usize,
    /// Most food items allowed on the board at once
    pub max_food: usize,
    /// Ticks between food spawn attempts
    pub food_interval: u64,
    /// Real-time delay between ticks, in milliseconds
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            grid_size: 20,
            start_length: 3,
            max_food: 10,
            food_interval: 5,
            tick_ms: 300,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Small board for tests
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Large board
    pub fn large() -> Self {
        Self::new(800, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 500);
        assert_eq!(config.height, 500);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.start_length, 3);
        assert_eq!(config.max_food, 10);
        assert_eq!(config.food_interval, 5);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 240);
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 240);
        assert_eq!(config.grid_size, 20);
    }
}
