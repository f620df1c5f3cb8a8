use std::fmt;

use bevy::prelude::*;

/// Stable identity of a shape within a drawing. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry of a shape, relative to its position (the shape's center).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle { size: IVec2 },
    Circle { radius: i32 },
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle { size } => write!(f, "rectangle {}x{}", size.x, size.y),
            ShapeKind::Circle { radius } => write!(f, "circle r={}", radius),
        }
    }
}

/// A shape placed on the drawing.
///
/// Coordinates are integers so that moving by an offset and then by its
/// negation lands exactly where the shape started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub position: IVec2,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, position: IVec2) -> Self {
        Self { id, kind, position }
    }

    /// Coordinates wrap at the `i32` bounds; a move followed by its
    /// negation always lands back on the starting position.
    pub fn translate(&mut self, offset: IVec2) {
        self.position = self.position.wrapping_add(offset);
    }
}
