//! Undo/Redo system for drawing edits.
//!
//! Every reversible edit of the drawing is recorded as a [`Change`] in the
//! [`History`] resource, which keeps one stack of changes to undo and one of
//! changes to redo. Recording a new change discards the redo stack.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//! - **Ctrl+N**: Start a new, empty drawing (history is discarded)
//! - **R** / **C**: Add a rectangle / circle at the origin
//! - **Arrow keys**: Nudge the topmost shape
//!
//! ## Supported Operations
//!
//! - Shape creation
//! - Shape movement
//!
//! ## Module Structure
//!
//! - [`change`] - `Reversible` trait and the `Change` enum implementing it
//! - [`command_history`] - History resource with the undo/redo stacks
//! - [`requests`] - Messages for editing the drawing and the systems handling them
//! - [`systems`] - Bevy systems for keyboard shortcuts

mod change;
mod command_history;
mod requests;
mod systems;


// Re-exports
pub use change::Change;
pub use command_history::History;
pub use requests::{CreateShapeRequest, MoveShapeRequest};

use bevy::prelude::*;

pub struct HistoryPlugin;

impl Plugin for HistoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<History>()
            .add_message::<requests::CreateShapeRequest>()
            .add_message::<requests::MoveShapeRequest>()
            .add_message::<requests::UndoRequest>()
            .add_message::<requests::RedoRequest>()
            .add_message::<requests::ClearDrawingRequest>()
            .add_systems(
                Update,
                (
                    systems::handle_undo_shortcut,
                    systems::handle_redo_shortcut,
                    systems::handle_new_drawing_shortcut,
                    requests::clear_drawing_system,
                    requests::create_shape_system,
                    requests::move_shape_system,
                    requests::undo_system,
                    requests::redo_system,
                )
                    .chain(),
            );
    }
}
