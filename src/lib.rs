//! Asteroid Dodge - survive the asteroid field for as long as you can
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, reflection, spawning, arena clock)
//! - `game`: Session controller (start/stop, best-time bookkeeping, event dispatch)
//! - `best_time`: Persisted best survival time
//! - `renderer`: Draw list and 2D canvas painter
//! - `platform`: Browser/native platform abstraction (storage, input, dialogs)

pub mod best_time;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use best_time::{BestTimeBook, BestTimeRecord, format_time};
pub use config::GameConfig;
pub use error::{ConfigError, StorageError};
pub use game::{GameController, StopOutcome, StopReason};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (canvas units)
    pub const CANVAS_WIDTH: f32 = 900.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Movement/redraw tick period
    pub const TICK_INTERVAL_MS: i32 = 20;
    /// Timer display refresh period
    pub const CLOCK_INTERVAL_MS: i32 = 1;

    /// Asteroids spawned per game
    pub const ASTEROID_COUNT: usize = 10;
    pub const ASTEROID_SIZE: f32 = 30.0;
    /// Asteroid speed magnitude range [min, max), canvas units per tick
    pub const ASTEROID_MIN_SPEED: i32 = 1;
    pub const ASTEROID_MAX_SPEED: i32 = 5;
    pub const ASTEROID_COLOR: &str = "gray";

    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player moves in discrete cardinal steps of this length
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_COLOR: &str = "red";

    /// LocalStorage key for the best time record
    pub const BEST_TIME_KEY: &str = "bestTime";
}
