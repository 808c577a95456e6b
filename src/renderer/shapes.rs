//! Draw list generation for 2D primitives

use crate::sim::{Body, Entity};

/// A filled axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCommand<'a> {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'a str,
}

impl<'a> RectCommand<'a> {
    /// Rectangle centered on the body's position
    pub fn for_body(body: &'a Body) -> Self {
        let half = body.half();
        Self {
            x: body.pos.x - half.x,
            y: body.pos.y - half.y,
            width: body.size.x,
            height: body.size.y,
            color: &body.color,
        }
    }
}

/// One rectangle per entity, in draw order
pub fn frame(entities: &[Entity]) -> Vec<RectCommand<'_>> {
    entities
        .iter()
        .map(|e| RectCommand::for_body(e.body()))
        .collect()
}
