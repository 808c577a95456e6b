//! One game's worth of entities and the events that drive them

use glam::Vec2;
use rand::Rng;

use super::entity::{Direction, Entity, Player};
use super::spawn::{spawn_asteroid, spawn_player};
use crate::config::GameConfig;

/// Inputs consumed by the game, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Fixed-interval movement tick
    Tick,
    /// Directional key press
    Steer(Direction),
    /// Timer display refresh at the given wall-clock instant (ms)
    Clock { now_ms: f64 },
}

/// Live entities of a running game
///
/// Built fresh by [`Session::spawn`] and dropped when the game stops. The
/// player is always the first entity so it is moved and drawn first.
#[derive(Debug, Clone)]
pub struct Session {
    canvas: Vec2,
    entities: Vec<Entity>,
}

impl Session {
    /// Spawn the centered player and `config.asteroid_count` asteroids
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        let mut entities = Vec::with_capacity(config.asteroid_count + 1);
        entities.push(Entity::Player(spawn_player(config)));
        entities.extend((0..config.asteroid_count).map(|_| Entity::Asteroid(spawn_asteroid(rng, config))));

        Self {
            canvas: Vec2::new(config.canvas_width, config.canvas_height),
            entities,
        }
    }

    /// Build a session from explicit entities (player first)
    pub fn from_entities(canvas: Vec2, mut entities: Vec<Entity>) -> Self {
        entities.sort_by_key(|e| !e.is_player());
        Self { canvas, entities }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> Option<&Player> {
        self.entities.iter().find_map(|e| match e {
            Entity::Player(p) => Some(p),
            Entity::Asteroid(_) => None,
        })
    }

    pub fn asteroid_count(&self) -> usize {
        self.entities.iter().filter(|e| !e.is_player()).count()
    }

    /// Advance every entity one tick. The player holds still.
    pub fn tick(&mut self) {
        for entity in &mut self.entities {
            entity.step(self.canvas, None);
        }
    }

    /// Move only the player, immediately
    pub fn steer(&mut self, dir: Direction) {
        if let Some(player) = self.entities.iter_mut().find(|e| e.is_player()) {
            player.step(self.canvas, Some(dir));
        }
    }

    /// Apply a movement event. Returns true if entities may have moved.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::Tick => {
                self.tick();
                true
            }
            Event::Steer(dir) => {
                self.steer(dir);
                true
            }
            Event::Clock { .. } => false,
        }
    }
}
