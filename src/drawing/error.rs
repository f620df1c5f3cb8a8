use thiserror::Error;

use super::ShapeId;

/// Failures of the drawing's mutation primitives.
///
/// These only occur when the drawing and the command history have drifted
/// apart, e.g. a shape was removed behind the history's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawingError {
    #[error("shape {0} is not in the drawing")]
    MissingShape(ShapeId),
    #[error("shape {0} is already in the drawing")]
    DuplicateShape(ShapeId),
}
