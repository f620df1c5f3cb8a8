//! Request messages through which the host edits the drawing, and the
//! systems that carry them out against the command history.
//!
//! These messages are the editing API of the drawing: keyboard shortcuts
//! write them, and so can any other input or tool plugin.

use bevy::prelude::*;

use crate::drawing::{Drawing, Shape, ShapeId, ShapeKind};

use super::change::Change;
use super::command_history::History;

/// Message to add a new shape to the drawing
#[derive(Message, Debug, Clone, Copy)]
pub struct CreateShapeRequest {
    pub kind: ShapeKind,
    pub position: IVec2,
}

/// Message to move an existing shape by an offset
#[derive(Message, Debug, Clone, Copy)]
pub struct MoveShapeRequest {
    pub id: ShapeId,
    pub offset: IVec2,
}

/// Message to undo the last change
#[derive(Message, Debug, Clone, Copy)]
pub struct UndoRequest;

/// Message to redo the last undone change
#[derive(Message, Debug, Clone, Copy)]
pub struct RedoRequest;

/// Message to start over with an empty drawing and no history
#[derive(Message, Debug, Clone, Copy)]
pub struct ClearDrawingRequest;

fn apply_change(change: Change, drawing: &mut Drawing, history: &mut History) {
    let description = change.description();
    match history.apply(change, drawing) {
        Ok(()) => debug!("Recorded: {}", description),
        Err(e) => warn!("Could not {}: {}", description, e),
    }
}

/// System to create shapes and record their creation
pub fn create_shape_system(
    mut events: MessageReader<CreateShapeRequest>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    for event in events.read() {
        let id = drawing.allocate_id();
        let change = Change::creation(Shape::new(id, event.kind, event.position));
        apply_change(change, &mut drawing, &mut history);
    }
}

/// System to move shapes and record the move
pub fn move_shape_system(
    mut events: MessageReader<MoveShapeRequest>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    for event in events.read() {
        if event.offset == IVec2::ZERO {
            continue;
        }
        apply_change(
            Change::edit(event.id, event.offset),
            &mut drawing,
            &mut history,
        );
    }
}

/// System to undo the most recent change
pub fn undo_system(
    mut events: MessageReader<UndoRequest>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    for _ in events.read() {
        match history.undo(&mut *drawing) {
            Ok(true) => {
                if let Some(change) = history.peek_redo() {
                    info!("Undo: {}", change.description());
                }
            }
            Ok(false) => debug!("Nothing to undo"),
            Err(e) => warn!("Undo failed: {}", e),
        }
    }
}

/// System to redo the most recently undone change
pub fn redo_system(
    mut events: MessageReader<RedoRequest>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    for _ in events.read() {
        match history.redo(&mut *drawing) {
            Ok(true) => {
                if let Some(change) = history.peek_undo() {
                    info!("Redo: {}", change.description());
                }
            }
            Ok(false) => debug!("Nothing to redo"),
            Err(e) => warn!("Redo failed: {}", e),
        }
    }
}

/// System to reset the drawing together with its history
pub fn clear_drawing_system(
    mut events: MessageReader<ClearDrawingRequest>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    for _ in events.read() {
        drawing.clear();
        history.clear();
        info!("Cleared drawing and history");
    }
}
