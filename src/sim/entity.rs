//! Player and asteroid entities
//!
//! Coordinates: origin top-left, y grows downward. Velocities use the opposite
//! vertical convention (positive `vel.y` moves up the screen), so every step
//! applies `pos += (vel.x, -vel.y)`.

use glam::Vec2;

use crate::consts::PLAYER_SPEED;

/// Cardinal movement direction for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Velocity for this direction at the given magnitude
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-speed, 0.0),
            Direction::Up => Vec2::new(0.0, speed),
            Direction::Right => Vec2::new(speed, 0.0),
            Direction::Down => Vec2::new(0.0, -speed),
        }
    }
}

/// Shared geometry and appearance
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// CSS color
    pub color: String,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, color: impl Into<String>) -> Self {
        Self {
            pos,
            size,
            color: color.into(),
        }
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether the bounding box lies within `[0, canvas.x] × [0, canvas.y]`
    pub fn inside(&self, canvas: Vec2) -> bool {
        self.left() >= 0.0 && self.top() >= 0.0 && self.right() <= canvas.x && self.bottom() <= canvas.y
    }
}

/// Drifting obstacle that bounces off the canvas edges
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub vel: Vec2,
}

impl Asteroid {
    pub fn new(body: Body, vel: Vec2) -> Self {
        Self { body, vel }
    }

    /// Reflect off any edge the next move would cross, then move.
    ///
    /// The check looks ahead at the position after the pending move rather than
    /// the current edges, so the box never leaves the canvas. This departs from
    /// a current-edge rule on purpose: with a 30 px box at x=16 and vx=-3 the
    /// left edge is still inside, yet the move would cross it, so this step
    /// reflects to x=19 where the current-edge rule would move to x=13.
    ///
    /// Axes are independent: a corner hit flips both components in one step.
    /// Touching the far edge (`>=`) counts as crossing it.
    pub fn step(&mut self, canvas: Vec2) {
        let b = &self.body;

        if b.left() + self.vel.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if b.right() + self.vel.x >= canvas.x {
            self.vel.x = -self.vel.x.abs();
        }

        // Screen y is inverted relative to vel.y
        if b.top() - self.vel.y < 0.0 {
            self.vel.y = -self.vel.y.abs();
        } else if b.bottom() - self.vel.y >= canvas.y {
            self.vel.y = self.vel.y.abs();
        }

        self.body.pos += Vec2::new(self.vel.x, -self.vel.y);
    }
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub vel: Vec2,
    /// Step length per directional input
    pub speed: f32,
}

impl Player {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    /// Move one step in `dir`.
    ///
    /// The velocity is replaced, never accumulated. A step that would cross the
    /// boundary in the direction of travel snaps to the boundary instead and the
    /// velocity is not applied.
    pub fn steer(&mut self, dir: Direction, canvas: Vec2) {
        self.vel = dir.velocity(self.speed);

        let half = self.body.half();
        let b = &self.body;
        let v = self.vel;

        if v.x < 0.0 && b.left() + v.x < 0.0 {
            self.body.pos.x = half.x;
        } else if v.x > 0.0 && b.right() + v.x >= canvas.x {
            self.body.pos.x = canvas.x - half.x;
        } else if v.y > 0.0 && b.top() - v.y < 0.0 {
            self.body.pos.y = half.y;
        } else if v.y < 0.0 && b.bottom() - v.y >= canvas.y {
            self.body.pos.y = canvas.y - half.y;
        } else {
            self.body.pos += Vec2::new(v.x, -v.y);
        }
    }
}

/// Anything living on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Player(Player),
    Asteroid(Asteroid),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(p) => &p.body,
            Entity::Asteroid(a) => &a.body,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Entity::Player(_))
    }

    /// Advance one update.
    ///
    /// Asteroids move on every call and ignore `input`. The player only moves
    /// when a direction is supplied; the periodic tick passes `None`.
    pub fn step(&mut self, canvas: Vec2, input: Option<Direction>) {
        match self {
            Entity::Asteroid(a) => a.step(canvas),
            Entity::Player(p) => {
                if let Some(dir) = input {
                    p.steer(dir, canvas);
                }
            }
        }
    }
}
