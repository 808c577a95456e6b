//! Arena configuration
//!
//! Defaults come from [`crate::consts`]. The browser build always runs with the
//! defaults; tests and the native demo construct smaller arenas.

use crate::consts::*;
use crate::error::ConfigError;

/// Everything a game session needs to know about its arena
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Movement tick period (ms)
    pub tick_interval_ms: i32,
    /// Timer display refresh period (ms)
    pub clock_interval_ms: i32,

    pub asteroid_count: usize,
    pub asteroid_size: f32,
    pub asteroid_min_speed: i32,
    pub asteroid_max_speed: i32,
    pub asteroid_color: String,

    pub player_size: f32,
    pub player_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            clock_interval_ms: CLOCK_INTERVAL_MS,
            asteroid_count: ASTEROID_COUNT,
            asteroid_size: ASTEROID_SIZE,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_color: ASTEROID_COLOR.to_string(),
            player_size: PLAYER_SIZE,
            player_color: PLAYER_COLOR.to_string(),
        }
    }
}

impl GameConfig {
    /// Same defaults on a different canvas
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Reject configurations the spawner or step rules cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Canvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        let fits = |size: f32| size > 0.0 && size < self.canvas_width && size < self.canvas_height;
        if !fits(self.asteroid_size) {
            return Err(ConfigError::EntitySize { what: "asteroid" });
        }
        if !fits(self.player_size) {
            return Err(ConfigError::EntitySize { what: "player" });
        }

        if self.asteroid_min_speed < 1 || self.asteroid_max_speed <= self.asteroid_min_speed {
            return Err(ConfigError::SpeedRange {
                min: self.asteroid_min_speed,
                max: self.asteroid_max_speed,
            });
        }

        if self.tick_interval_ms < 1 {
            return Err(ConfigError::Interval { what: "tick" });
        }
        if self.clock_interval_ms < 1 {
            return Err(ConfigError::Interval { what: "clock" });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 900.0);
        assert_eq!(config.canvas_height, 600.0);
        assert_eq!(config.asteroid_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_speed_range() {
        let config = GameConfig {
            asteroid_min_speed: 5,
            asteroid_max_speed: 5,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpeedRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn test_rejects_entity_larger_than_canvas() {
        let config = GameConfig {
            player_size: 40.0,
            ..GameConfig::with_canvas(40.0, 100.0)
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EntitySize { what: "player" })
        );
    }

    #[test]
    fn test_rejects_zero_canvas() {
        assert!(matches!(
            GameConfig::with_canvas(0.0, 600.0).validate(),
            Err(ConfigError::Canvas { .. })
        ));
    }
}
