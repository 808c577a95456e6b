//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock time is passed in, never read
//! - Seeded RNG only
//! - Stable iteration order (player first, then asteroids in spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod clock;
pub mod entity;
pub mod session;
pub mod spawn;

pub use arena::{Arena, RunState};
pub use clock::{SurvivalTime, format_time};
pub use entity::{Asteroid, Body, Direction, Entity, Player};
pub use session::{Event, Session};
pub use spawn::{Edge, random_speed, spawn_asteroid, spawn_player};
