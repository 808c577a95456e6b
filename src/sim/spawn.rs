//! Entity creation: bounded-random asteroid placement and the centered player

use glam::Vec2;
use rand::Rng;

use super::entity::{Asteroid, Body, Player};
use crate::config::GameConfig;

/// Canvas edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Uniform integer in `[min, max)`
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(max > min, "empty range [{min}, {max})");
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Signed speed drawn from `[min, max)`, pointing away from the positive side of
/// the axis: negated when `v >= 0`, positive when `v < 0`.
pub fn random_speed<R: Rng + ?Sized>(rng: &mut R, v: f32, min: i32, max: i32) -> i32 {
    let speed = random_in_range(rng, min, max);
    if v < 0.0 { speed } else { -speed }
}

/// Sample from the middle half `[floor(0.25·extent), floor(0.75·extent))`
fn middle_half<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    let lo = (0.25 * extent).floor() as i32;
    let hi = (0.75 * extent).floor() as i32;
    random_in_range(rng, lo, hi) as f32
}

/// Spawn position for an asteroid of `size` hugging `edge`
pub fn edge_position<R: Rng + ?Sized>(rng: &mut R, edge: Edge, size: Vec2, canvas: Vec2) -> Vec2 {
    let half = size / 2.0;
    match edge {
        Edge::Left => Vec2::new(half.x, middle_half(rng, canvas.y)),
        Edge::Top => Vec2::new(middle_half(rng, canvas.x), half.y),
        Edge::Right => Vec2::new(canvas.x - half.x - 1.0, middle_half(rng, canvas.y)),
        Edge::Bottom => Vec2::new(middle_half(rng, canvas.x), canvas.y - half.y - 1.0),
    }
}

/// Create one asteroid against a random edge with an inward-biased drift
pub fn spawn_asteroid<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Asteroid {
    let canvas = Vec2::new(config.canvas_width, config.canvas_height);
    let size = Vec2::splat(config.asteroid_size);
    let edge = Edge::random(rng);
    let pos = edge_position(rng, edge, size, canvas);

    let (min, max) = (config.asteroid_min_speed, config.asteroid_max_speed);
    let vx = random_speed(rng, pos.x, min, max);
    let vy = -random_speed(rng, pos.y, min, max);

    Asteroid::new(
        Body::new(pos, size, config.asteroid_color.as_str()),
        Vec2::new(vx as f32, vy as f32),
    )
}

/// Create the player at the canvas center
pub fn spawn_player(config: &GameConfig) -> Player {
    let center = Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0);
    Player::new(Body::new(
        center,
        Vec2::splat(config.player_size),
        config.player_color.as_str(),
    ))
}
