//! Command history resource for tracking undo/redo state.

use bevy::prelude::*;

use super::change::{Change, Reversible};

/// Resource tracking command history for undo/redo
#[derive(Resource, Debug)]
pub struct History<C = Change> {
    /// Stack of changes that can be undone (most recent last)
    undo_stack: Vec<C>,
    /// Stack of changes that can be redone (most recent last)
    redo_stack: Vec<C>,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }
}

impl<C: Reversible> History<C> {
    /// Record a change that has already been applied
    pub fn record(&mut self, change: C) {
        // A new action abandons whatever was undone before it
        self.redo_stack.clear();
        self.undo_stack.push(change);
    }

    /// Apply a change to the target and record it. Nothing is recorded if
    /// the change fails to apply.
    pub fn apply(&mut self, change: C, target: &mut C::Target) -> Result<(), C::Error> {
        change.forward(target)?;
        self.record(change);
        Ok(())
    }

    /// Reverse the most recent change and move it to the redo stack.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. On failure the
    /// change stays on the undo stack and the error is returned as is.
    pub fn undo(&mut self, target: &mut C::Target) -> Result<bool, C::Error> {
        let Some(change) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = change.reverse(target) {
            self.undo_stack.push(change);
            return Err(e);
        }
        self.redo_stack.push(change);
        Ok(true)
    }

    /// Re-apply the most recently undone change and move it back to the
    /// undo stack.
    ///
    /// Returns `Ok(false)` when there is nothing to redo. On failure the
    /// change stays on the redo stack and the error is returned as is.
    pub fn redo(&mut self, target: &mut C::Target) -> Result<bool, C::Error> {
        let Some(change) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(e) = change.forward(target) {
            self.redo_stack.push(change);
            return Err(e);
        }
        self.undo_stack.push(change);
        Ok(true)
    }
}

#[allow(dead_code)]
impl<C> History<C> {
    /// Check if there are changes to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are changes to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the count of undoable changes
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the count of redoable changes
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// The change the next undo would reverse
    pub fn peek_undo(&self) -> Option<&C> {
        self.undo_stack.last()
    }

    /// The change the next redo would re-apply
    pub fn peek_redo(&self) -> Option<&C> {
        self.redo_stack.last()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
