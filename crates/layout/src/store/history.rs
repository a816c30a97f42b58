//! Bounded undo/redo stacks of layout snapshots.

use std::collections::VecDeque;

use crate::model::Layout;

use super::types::MAX_HISTORY;

/// An independent copy of a layout captured for history.
///
/// Once captured the snapshot is never handed out mutably, so later edits to
/// the live layout cannot leak into it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot(Layout);

impl HistorySnapshot {
    pub fn capture(layout: &Layout) -> Self {
        Self(layout.clone())
    }

    pub fn layout(&self) -> &Layout {
        &self.0
    }

    pub(crate) fn into_layout(self) -> Layout {
        self.0
    }
}

/// Undo and redo stacks owned by one `LayoutStore`.
#[derive(Debug, Default, Clone)]
pub struct LayoutHistory {
    undo_stack: VecDeque<HistorySnapshot>,
    redo_stack: Vec<HistorySnapshot>,
}

impl LayoutHistory {
    /// Record a snapshot taken before an edit, clearing the redo stack.
    /// If the stack exceeds `MAX_HISTORY`, the oldest snapshot is dropped.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.redo_stack.clear();
        self.push_undo_no_clear(snapshot);
    }

    /// Push onto the undo stack (after redo), without clearing redo.
    pub fn push_undo_no_clear(&mut self, snapshot: HistorySnapshot) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.pop_front();
        }
    }

    /// Push onto the redo stack (after undo).
    pub fn push_redo(&mut self, snapshot: HistorySnapshot) {
        self.redo_stack.push(snapshot);
    }

    pub fn pop_undo(&mut self) -> Option<HistorySnapshot> {
        self.undo_stack.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<HistorySnapshot> {
        self.redo_stack.pop()
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Oldest snapshot still available to undo.
    #[cfg(test)]
    pub fn oldest_undo(&self) -> Option<&HistorySnapshot> {
        self.undo_stack.front()
    }
}
