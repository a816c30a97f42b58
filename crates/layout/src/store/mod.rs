//! Versioned, undoable layout store.
//!
//! A `LayoutStore` resource owns the layout being edited plus bounded undo
//! and redo stacks of deep snapshots (capped at 100 entries, oldest evicted
//! first). Every change is a tagged mutation: `Edit` records history, `Load`
//! and `Revert` start a fresh session, `Preview` leaves history alone.
//!
//! UI code sends `LayoutCommand`, `UndoRequested` and `RedoRequested` events;
//! Ctrl+Z / Ctrl+Y (or Ctrl+Shift+Z) map to undo/redo.

pub mod history;
pub mod layout_store;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests;

pub use history::{HistorySnapshot, LayoutHistory};
pub use layout_store::LayoutStore;
pub use systems::{
    apply_layout_commands, finish_restore, keyboard_undo_redo, process_redo, process_undo,
    KeyChord, RedoRequested, UndoRequested,
};
pub use types::{
    CommandOutcome, HistoryPolicy, HistoryStep, LayoutCommand, MutationKind, RoomEdit, MAX_HISTORY,
};
