use bevy::prelude::*;

pub mod config;
pub mod diff;
pub mod fingerprint;
pub mod generator;
pub mod model;
pub mod notifications;
pub mod selection;
pub mod settings;
pub mod store;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_harness;

pub use diff::{compute_diff, FieldChange, LayoutDiff, ModifiedRoom};
pub use model::{Layout, LayoutError, Room, RoomField};
pub use store::{LayoutCommand, LayoutStore, MutationKind, RoomEdit};

/// System ordering within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// Input translation: keyboard shortcuts, gestures, selection.
    Input,
    /// Layout commands, undo and redo.
    Apply,
    /// Consumers of the updated layout (exports, notification log).
    React,
}

/// Registers the layout store, its events and the systems that drive it.
///
/// If a `LayoutStore` is already present it is kept; otherwise an empty
/// store is inserted in its initial-load grace window, which closes in
/// `PostStartup`.
pub struct LayoutPlugin;

impl Plugin for LayoutPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<store::LayoutStore>() {
            app.insert_resource(store::LayoutStore::restoring());
        }

        app.add_event::<store::LayoutCommand>()
            .add_event::<store::UndoRequested>()
            .add_event::<store::RedoRequested>()
            .add_event::<transform::GestureEvent>()
            .add_event::<selection::SelectRoom>()
            .add_event::<notifications::EditorNotification>()
            .init_resource::<transform::GestureTracker>()
            .init_resource::<selection::SelectedRoom>()
            .init_resource::<settings::EditorSettings>()
            .init_resource::<notifications::NotificationLog>();

        app.configure_sets(
            Update,
            (EditorSet::Input, EditorSet::Apply, EditorSet::React).chain(),
        );

        app.add_systems(PostStartup, store::finish_restore);
        app.add_systems(
            Update,
            (
                (
                    store::keyboard_undo_redo,
                    selection::apply_selection,
                    transform::track_gestures,
                )
                    .chain()
                    .in_set(EditorSet::Input),
                (
                    store::apply_layout_commands,
                    store::process_undo,
                    store::process_redo,
                )
                    .chain()
                    .in_set(EditorSet::Apply),
                notifications::collect_notifications.in_set(EditorSet::React),
            ),
        );
    }
}
