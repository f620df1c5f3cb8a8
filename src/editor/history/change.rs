//! Reversible changes to the drawing.

use bevy::prelude::*;

use crate::drawing::{Drawing, DrawingError, Shape, ShapeId};

/// An edit that can be applied and taken back.
///
/// `forward` and `reverse` must be exact inverses: running one after the
/// other leaves the target as it was.
pub trait Reversible {
    type Target;
    type Error;

    fn forward(&self, target: &mut Self::Target) -> Result<(), Self::Error>;
    fn reverse(&self, target: &mut Self::Target) -> Result<(), Self::Error>;
}

/// A reversible edit of the drawing
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// A shape was added to the drawing
    Creation { shape: Shape },
    /// A shape was moved by an offset
    Edit { id: ShapeId, offset: IVec2 },
}

impl Change {
    pub fn creation(shape: Shape) -> Self {
        Self::Creation { shape }
    }

    pub fn edit(id: ShapeId, offset: IVec2) -> Self {
        Self::Edit { id, offset }
    }

    /// Short human-readable summary, used in logs
    pub fn description(&self) -> String {
        match self {
            Change::Creation { shape } => format!("create {} {}", shape.kind, shape.id),
            Change::Edit { id, offset } => {
                format!("move shape {} by ({}, {})", id, offset.x, offset.y)
            }
        }
    }
}

impl Reversible for Change {
    type Target = Drawing;
    type Error = DrawingError;

    fn forward(&self, drawing: &mut Drawing) -> Result<(), DrawingError> {
        match self {
            Change::Creation { shape } => drawing.insert_shape(shape.clone()),
            Change::Edit { id, offset } => drawing.translate_shape(*id, *offset),
        }
    }

    fn reverse(&self, drawing: &mut Drawing) -> Result<(), DrawingError> {
        match self {
            Change::Creation { shape } => drawing.remove_shape(shape.id).map(|_| ()),
            Change::Edit { id, offset } => drawing.translate_shape(*id, IVec2::ZERO.wrapping_sub(*offset)),
        }
    }
}
