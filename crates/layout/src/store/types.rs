//! Command and mutation-tag types for the layout store.

use bevy::prelude::*;
use serde_json::Value;

use crate::model::{Room, RoomField};
use crate::transform::TransformCommit;

pub use crate::config::MAX_HISTORY;

// ---------------------------------------------------------------------------
// Mutation tags
// ---------------------------------------------------------------------------

/// Why the layout is changing. The store's history policy is a function of
/// this tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// A user edit: undoable.
    Edit,
    /// Wholesale replacement from a project, generator or persisted state.
    Load,
    /// Wholesale replacement after reverting to a stored version.
    Revert,
    /// Temporary display of a stored version. Leaves history untouched so the
    /// editing session resumes intact once the preview is cancelled.
    Preview,
}

/// What happens to the undo/redo stacks for a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPolicy {
    /// Snapshot the current layout onto the undo stack and clear redo.
    Record,
    /// Start a fresh editing session: both stacks are emptied.
    Reset,
    /// Change the layout without touching either stack.
    Untracked,
}

impl MutationKind {
    pub fn history_policy(self) -> HistoryPolicy {
        match self {
            MutationKind::Edit => HistoryPolicy::Record,
            MutationKind::Load | MutationKind::Revert => HistoryPolicy::Reset,
            MutationKind::Preview => HistoryPolicy::Untracked,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A single-field edit from the room inspector.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEdit {
    Rename(String),
    Size(f64),
    X(f64),
    Y(f64),
    RotationY(f64),
    Scale(f64),
}

impl RoomEdit {
    /// The numeric field this edit targets, or `None` for a rename.
    pub fn field(&self) -> Option<(RoomField, f64)> {
        match *self {
            RoomEdit::Rename(_) => None,
            RoomEdit::Size(v) => Some((RoomField::Size, v)),
            RoomEdit::X(v) => Some((RoomField::X, v)),
            RoomEdit::Y(v) => Some((RoomField::Y, v)),
            RoomEdit::RotationY(v) => Some((RoomField::RotationY, v)),
            RoomEdit::Scale(v) => Some((RoomField::Scale, v)),
        }
    }
}

/// Every way the editor can change the layout. Consumed by
/// `LayoutStore::apply`; UI code only ever produces these.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    /// Append a room; its name is disambiguated against existing rooms.
    AddRoom(Room),
    /// Change one field of the named room.
    EditRoom { name: String, edit: RoomEdit },
    /// Remove the named room.
    DeleteRoom { name: String },
    /// Write the final pose of a manipulation gesture.
    CommitTransform {
        name: String,
        commit: TransformCommit,
    },
    /// Set a metadata entry (e.g. `description`).
    SetMeta { key: String, value: Value },
    /// Replace the whole layout.
    Replace {
        layout: crate::model::Layout,
        kind: MutationKind,
    },
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(String),
    Edited(String),
    Renamed { from: String, to: String },
    Deleted(String),
    Transformed(String),
    MetaUpdated(String),
    Replaced(MutationKind),
}

/// Result of an undo or redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    /// A snapshot was restored.
    Applied,
    /// The relevant stack was empty; nothing changed.
    Empty,
}
