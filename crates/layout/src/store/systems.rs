//! Systems driving the layout store from events.

use bevy::prelude::*;

use crate::notifications::EditorNotification;
use crate::selection::SelectedRoom;

use super::layout_store::LayoutStore;
use super::types::{HistoryStep, LayoutCommand};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Marker event: the user wants to undo.
#[derive(Event, Debug, Clone, Copy)]
pub struct UndoRequested;

/// Marker event: the user wants to redo.
#[derive(Event, Debug, Clone, Copy)]
pub struct RedoRequested;

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

/// A key plus required modifiers. Ctrl and the platform command key are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    pub fn just_pressed(&self, keys: &ButtonInput<KeyCode>) -> bool {
        let ctrl = keys.any_pressed([
            KeyCode::ControlLeft,
            KeyCode::ControlRight,
            KeyCode::SuperLeft,
            KeyCode::SuperRight,
        ]);
        let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        keys.just_pressed(self.key) && ctrl == self.ctrl && shift == self.shift
    }
}

/// Ctrl+Z -> UndoRequested, Ctrl+Y / Ctrl+Shift+Z -> RedoRequested.
///
/// Uses `Option<Res<...>>` so the system is a no-op in headless apps where
/// the input plugin is not present.
pub fn keyboard_undo_redo(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut undo_events: EventWriter<UndoRequested>,
    mut redo_events: EventWriter<RedoRequested>,
) {
    let Some(keys) = keys else { return };
    let undo = KeyChord::ctrl(KeyCode::KeyZ);
    let redo_y = KeyChord::ctrl(KeyCode::KeyY);
    let redo_shift_z = KeyChord {
        key: KeyCode::KeyZ,
        ctrl: true,
        shift: true,
    };

    if redo_shift_z.just_pressed(&keys) || redo_y.just_pressed(&keys) {
        redo_events.send(RedoRequested);
    } else if undo.just_pressed(&keys) {
        undo_events.send(UndoRequested);
    }
}

// ---------------------------------------------------------------------------
// Command + history processing
// ---------------------------------------------------------------------------

/// System that applies queued `LayoutCommand`s in order.
pub fn apply_layout_commands(
    mut events: EventReader<LayoutCommand>,
    mut store: ResMut<LayoutStore>,
    mut selected: ResMut<SelectedRoom>,
    mut notifications: EventWriter<EditorNotification>,
) {
    for command in events.read() {
        match store.apply(command.clone()) {
            Ok(outcome) => {
                debug!("Applied layout command: {outcome:?}");
                selected.follow(&outcome);
            }
            Err(e) => {
                notifications.send(EditorNotification::warning(e.to_string()));
            }
        }
    }
}

/// System that processes undo requests.
pub fn process_undo(
    mut events: EventReader<UndoRequested>,
    mut store: ResMut<LayoutStore>,
    mut notifications: EventWriter<EditorNotification>,
) {
    for _ in events.read() {
        if store.undo() == HistoryStep::Empty {
            notifications.send(EditorNotification::info("Nothing to undo"));
        }
    }
}

/// System that processes redo requests.
pub fn process_redo(
    mut events: EventReader<RedoRequested>,
    mut store: ResMut<LayoutStore>,
    mut notifications: EventWriter<EditorNotification>,
) {
    for _ in events.read() {
        if store.redo() == HistoryStep::Empty {
            notifications.send(EditorNotification::info("Nothing to redo"));
        }
    }
}

/// Closes the initial-load grace window once startup has finished.
pub fn finish_restore(mut store: ResMut<LayoutStore>) {
    if store.is_restoring() {
        store.finish_restore();
        debug!(
            "Layout restore finished with {} rooms",
            store.layout().rooms.len()
        );
    }
}
