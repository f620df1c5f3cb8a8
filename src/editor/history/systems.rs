//! Bevy systems for handling editor keyboard shortcuts.

use bevy::prelude::*;

use super::requests::{ClearDrawingRequest, RedoRequest, UndoRequest};

/// System to handle undo keyboard shortcut (Ctrl+Z)
pub fn handle_undo_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut undo_events: MessageWriter<UndoRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Z (without shift) = undo
    if ctrl && !shift && keyboard.just_pressed(KeyCode::KeyZ) {
        undo_events.write(UndoRequest);
    }
}

/// System to handle redo keyboard shortcut (Ctrl+Y or Ctrl+Shift+Z)
pub fn handle_redo_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut redo_events: MessageWriter<RedoRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    let redo_pressed = (ctrl && keyboard.just_pressed(KeyCode::KeyY))
        || (ctrl && shift && keyboard.just_pressed(KeyCode::KeyZ));

    if redo_pressed {
        redo_events.write(RedoRequest);
    }
}

/// System to handle the new drawing shortcut (Ctrl+N)
pub fn handle_new_drawing_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut clear_events: MessageWriter<ClearDrawingRequest>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if ctrl && keyboard.just_pressed(KeyCode::KeyN) {
        clear_events.write(ClearDrawingRequest);
    }
}
