//! The `LayoutStore` resource: current layout plus its history.

use bevy::prelude::*;
use serde_json::Value;

use crate::model::{Layout, LayoutError, Room};
use crate::transform::TransformCommit;

use super::history::{HistorySnapshot, LayoutHistory};
use super::types::{CommandOutcome, HistoryPolicy, HistoryStep, LayoutCommand, MutationKind, RoomEdit};

/// Owns the layout being edited and its undo/redo history for one editing
/// session.
///
/// All mutations funnel through [`LayoutStore::mutate`], which applies the
/// history policy of the mutation's tag before committing the new layout.
#[derive(Resource, Debug, Default, Clone)]
pub struct LayoutStore {
    layout: Layout,
    history: LayoutHistory,
    /// While set, edits do not record history. Covers restoring persisted
    /// state at startup.
    restoring: bool,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `layout` and empty history.
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout: layout.sanitized(),
            ..Self::default()
        }
    }

    /// A store in its initial-load grace window.
    pub fn restoring() -> Self {
        Self {
            restoring: true,
            ..Self::default()
        }
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    /// Close the initial-load grace window. Later edits record history.
    pub fn finish_restore(&mut self) {
        self.restoring = false;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &LayoutHistory {
        &self.history
    }

    // -----------------------------------------------------------------------
    // Core entry points
    // -----------------------------------------------------------------------

    /// Compute the next layout from the current one and commit it, applying
    /// the history policy of `kind` first.
    pub fn mutate(&mut self, kind: MutationKind, updater: impl FnOnce(&Layout) -> Layout) {
        let next = updater(&self.layout).sanitized();
        match kind.history_policy() {
            HistoryPolicy::Record => {
                if !self.restoring {
                    self.history.push(HistorySnapshot::capture(&self.layout));
                }
            }
            HistoryPolicy::Reset => self.history.clear(),
            HistoryPolicy::Untracked => {}
        }
        self.layout = next;
    }

    /// Replace the layout wholesale.
    pub fn replace(&mut self, layout: Layout, kind: MutationKind) {
        self.mutate(kind, move |_| layout);
    }

    /// Restore the most recent undo snapshot. The current layout moves to the
    /// redo stack.
    pub fn undo(&mut self) -> HistoryStep {
        let Some(previous) = self.history.pop_undo() else {
            return HistoryStep::Empty;
        };
        self.history
            .push_redo(HistorySnapshot::capture(&self.layout));
        self.layout = previous.into_layout();
        HistoryStep::Applied
    }

    /// Restore the most recent redo snapshot. The current layout moves back
    /// onto the undo stack.
    pub fn redo(&mut self) -> HistoryStep {
        let Some(next) = self.history.pop_redo() else {
            return HistoryStep::Empty;
        };
        self.history
            .push_undo_no_clear(HistorySnapshot::capture(&self.layout));
        self.layout = next.into_layout();
        HistoryStep::Applied
    }

    // -----------------------------------------------------------------------
    // Room-level edits (all undoable)
    // -----------------------------------------------------------------------

    /// Append `room`, renaming it `"<name> 2"`, `"<name> 3"`, ... if the name
    /// is taken. Returns the stored name.
    pub fn add_room(&mut self, room: Room) -> String {
        let name = self.layout.unique_room_name(&room.name);
        let stored = Room {
            name: name.clone(),
            ..room
        };
        self.mutate(MutationKind::Edit, move |current| {
            let mut next = current.clone();
            next.rooms.push(stored);
            next
        });
        name
    }

    /// Change one field of the named room. A rename onto a name used by a
    /// different room is disambiguated like `add_room`.
    pub fn edit_room(&mut self, name: &str, edit: RoomEdit) -> Result<CommandOutcome, LayoutError> {
        self.require(name)?;
        match edit {
            RoomEdit::Rename(new_name) => {
                let target = self.layout.unique_rename(name, &new_name);
                let renamed = target.clone();
                self.edit_existing(name, move |room| room.name = renamed);
                Ok(CommandOutcome::Renamed {
                    from: name.to_string(),
                    to: target,
                })
            }
            other => {
                if let Some((field, value)) = other.field() {
                    self.edit_existing(name, move |room| room.set_field(field, value));
                }
                Ok(CommandOutcome::Edited(name.to_string()))
            }
        }
    }

    /// Remove the named room, returning it.
    pub fn delete_room(&mut self, name: &str) -> Result<Room, LayoutError> {
        let removed = self.require(name)?.clone();
        self.mutate(MutationKind::Edit, |current| {
            let mut next = current.clone();
            next.rooms.retain(|r| r.name != name);
            next
        });
        Ok(removed)
    }

    /// Write a committed gesture pose onto the named room.
    pub fn commit_transform(&mut self, name: &str, commit: TransformCommit) -> Result<(), LayoutError> {
        self.require(name)?;
        self.edit_existing(name, move |room| commit.apply_to(room));
        Ok(())
    }

    /// Set a metadata entry.
    pub fn set_meta(&mut self, key: &str, value: Value) {
        self.mutate(MutationKind::Edit, |current| {
            let mut next = current.clone();
            next.meta.insert(key.to_string(), value);
            next
        });
    }

    /// Apply one command.
    pub fn apply(&mut self, command: LayoutCommand) -> Result<CommandOutcome, LayoutError> {
        match command {
            LayoutCommand::AddRoom(room) => Ok(CommandOutcome::Added(self.add_room(room))),
            LayoutCommand::EditRoom { name, edit } => self.edit_room(&name, edit),
            LayoutCommand::DeleteRoom { name } => {
                self.delete_room(&name)?;
                Ok(CommandOutcome::Deleted(name))
            }
            LayoutCommand::CommitTransform { name, commit } => {
                self.commit_transform(&name, commit)?;
                Ok(CommandOutcome::Transformed(name))
            }
            LayoutCommand::SetMeta { key, value } => {
                self.set_meta(&key, value);
                Ok(CommandOutcome::MetaUpdated(key))
            }
            LayoutCommand::Replace { layout, kind } => {
                self.replace(layout, kind);
                Ok(CommandOutcome::Replaced(kind))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn require(&self, name: &str) -> Result<&Room, LayoutError> {
        self.layout
            .room(name)
            .ok_or_else(|| LayoutError::UnknownRoom(name.to_string()))
    }

    fn edit_existing(&mut self, name: &str, edit: impl FnOnce(&mut Room)) {
        self.mutate(MutationKind::Edit, |current| {
            let mut next = current.clone();
            if let Some(room) = next.room_mut(name) {
                edit(room);
            }
            next
        });
    }
}
