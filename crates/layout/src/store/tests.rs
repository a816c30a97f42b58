//! Unit tests for the layout store and its history.

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::model::{Layout, LayoutError, Room};
    use crate::store::history::{HistorySnapshot, LayoutHistory};
    use crate::store::layout_store::LayoutStore;
    use crate::store::types::{
        CommandOutcome, HistoryStep, LayoutCommand, MutationKind, RoomEdit, MAX_HISTORY,
    };
    use crate::transform::TransformCommit;

    fn one_room() -> Layout {
        Layout::new(vec![Room::new("A", 4.0, 0.0, 0.0)])
    }

    #[test]
    fn test_history_push_clears_redo_stack() {
        let mut history = LayoutHistory::default();
        history.push(HistorySnapshot::capture(&Layout::default()));
        let snapshot = history.pop_undo().unwrap();
        history.push_redo(snapshot);
        assert!(history.can_redo());

        history.push(HistorySnapshot::capture(&one_room()));
        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = LayoutHistory::default();
        for i in 0..150 {
            let layout = Layout::new(vec![Room::new(format!("R{i}"), 1.0, 0.0, 0.0)]);
            history.push(HistorySnapshot::capture(&layout));
        }
        assert_eq!(history.undo_len(), MAX_HISTORY);
        let oldest = history.oldest_undo().unwrap();
        assert_eq!(oldest.layout().rooms[0].name, "R50");
        let newest = history.pop_undo().unwrap();
        assert_eq!(newest.layout().rooms[0].name, "R149");
    }

    #[test]
    fn test_push_undo_no_clear_preserves_redo() {
        let mut history = LayoutHistory::default();
        history.push_redo(HistorySnapshot::capture(&Layout::default()));
        history.push_undo_no_clear(HistorySnapshot::capture(&one_room()));
        assert!(history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = LayoutStore::new();
        assert!(store.layout().rooms.is_empty());
        assert!(store.layout().meta.is_empty());
        assert!(!store.history().can_undo());
    }

    #[test]
    fn test_edit_records_history_and_undo_restores() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::X(2.5)).unwrap();
        assert_eq!(store.layout().rooms[0].x, 2.5);
        assert_eq!(store.history().undo_len(), 1);

        assert_eq!(store.undo(), HistoryStep::Applied);
        assert_eq!(store.layout(), &one_room());
        assert!(store.history().can_redo());

        assert_eq!(store.redo(), HistoryStep::Applied);
        assert_eq!(store.layout().rooms[0].x, 2.5);
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_are_noops() {
        let mut store = LayoutStore::with_layout(one_room());
        assert_eq!(store.undo(), HistoryStep::Empty);
        assert_eq!(store.redo(), HistoryStep::Empty);
        assert_eq!(store.layout(), &one_room());
    }

    #[test]
    fn test_new_edit_after_undo_clears_redo() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::X(1.0)).unwrap();
        store.undo();
        store.edit_room("A", RoomEdit::Y(1.0)).unwrap();
        assert_eq!(store.redo(), HistoryStep::Empty);
    }

    #[test]
    fn test_snapshot_is_independent_of_live_layout() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::Size(9.0)).unwrap();
        store.edit_room("A", RoomEdit::Size(12.0)).unwrap();
        store.add_room(Room::new("B", 1.0, 0.0, 0.0));

        store.undo();
        store.undo();
        assert_eq!(store.layout().rooms.len(), 1);
        assert_eq!(store.layout().rooms[0].size, 9.0);
        store.undo();
        assert_eq!(store.layout(), &one_room());
    }

    #[test]
    fn test_add_room_disambiguates_names() {
        let mut store = LayoutStore::new();
        assert_eq!(store.add_room(Room::new("Bedroom", 3.0, 0.0, 0.0)), "Bedroom");
        assert_eq!(store.add_room(Room::new("Bedroom", 3.0, 0.0, 0.0)), "Bedroom 2");
        assert_eq!(store.add_room(Room::new("Bedroom", 3.0, 0.0, 0.0)), "Bedroom 3");
        let names: Vec<_> = store.layout().rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bedroom", "Bedroom 2", "Bedroom 3"]);
    }

    #[test]
    fn test_add_room_coerces_non_finite_fields() {
        let mut store = LayoutStore::new();
        let mut room = Room::new("Weird", f64::NAN, f64::INFINITY, 1.0);
        room.scale = f64::NAN;
        store.add_room(room);
        let stored = &store.layout().rooms[0];
        assert_eq!(stored.size, 0.0);
        assert_eq!(stored.x, 0.0);
        assert_eq!(stored.y, 1.0);
        assert_eq!(stored.scale, 0.0);
    }

    #[test]
    fn test_edit_non_finite_value_becomes_zero() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::Y(f64::NAN)).unwrap();
        assert_eq!(store.layout().rooms[0].y, 0.0);
    }

    #[test]
    fn test_edit_unknown_room_records_nothing() {
        let mut store = LayoutStore::with_layout(one_room());
        let err = store.edit_room("Nope", RoomEdit::X(1.0)).unwrap_err();
        assert_eq!(err, LayoutError::UnknownRoom("Nope".into()));
        assert!(!store.history().can_undo());
        assert!(store.delete_room("Nope").is_err());
        assert!(!store.history().can_undo());
    }

    #[test]
    fn test_rename_onto_taken_name_is_disambiguated() {
        let mut store = LayoutStore::with_layout(Layout::new(vec![
            Room::new("A", 1.0, 0.0, 0.0),
            Room::new("B", 1.0, 2.0, 0.0),
        ]));
        let outcome = store.edit_room("B", RoomEdit::Rename("A".into())).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Renamed {
                from: "B".into(),
                to: "A 2".into()
            }
        );
        assert!(store.layout().contains("A 2"));
        assert!(!store.layout().contains("B"));
    }

    #[test]
    fn test_rename_keeps_own_suffix_when_base_is_taken() {
        let mut store = LayoutStore::with_layout(Layout::new(vec![
            Room::new("Bed", 3.0, 0.0, 0.0),
            Room::new("Bed 2", 3.0, 4.0, 0.0),
        ]));
        let outcome = store.edit_room("Bed 2", RoomEdit::Rename("Bed".into())).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Renamed {
                from: "Bed 2".into(),
                to: "Bed 2".into()
            }
        );
        let names: Vec<_> = store.layout().rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bed", "Bed 2"]);
    }

    #[test]
    fn test_rename_to_same_name_keeps_it() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::Rename("A".into())).unwrap();
        assert_eq!(store.layout().rooms[0].name, "A");
    }

    #[test]
    fn test_delete_room_is_undoable() {
        let mut store = LayoutStore::with_layout(one_room());
        let removed = store.delete_room("A").unwrap();
        assert_eq!(removed.name, "A");
        assert!(store.layout().rooms.is_empty());
        store.undo();
        assert_eq!(store.layout(), &one_room());
    }

    #[test]
    fn test_commit_transform_writes_pose() {
        let mut store = LayoutStore::with_layout(one_room());
        store
            .commit_transform(
                "A",
                TransformCommit {
                    x: 3.0,
                    y: 3.0,
                    rotation_y: 1.5708,
                    scale: 1.2,
                },
            )
            .unwrap();
        let room = &store.layout().rooms[0];
        assert_eq!((room.x, room.y, room.rotation_y, room.scale), (3.0, 3.0, 1.5708, 1.2));
        assert_eq!(room.size, 4.0);
        assert_eq!(store.history().undo_len(), 1);
    }

    #[test]
    fn test_load_resets_history() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::X(1.0)).unwrap();
        store.edit_room("A", RoomEdit::X(2.0)).unwrap();
        store.undo();
        store.replace(Layout::default(), MutationKind::Load);
        assert!(!store.history().can_undo());
        assert!(!store.history().can_redo());
        assert!(store.layout().rooms.is_empty());
    }

    #[test]
    fn test_revert_resets_history() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::X(1.0)).unwrap();
        store.replace(one_room(), MutationKind::Revert);
        assert_eq!(store.undo(), HistoryStep::Empty);
    }

    #[test]
    fn test_preview_keeps_history_untouched() {
        let mut store = LayoutStore::with_layout(one_room());
        store.edit_room("A", RoomEdit::X(1.0)).unwrap();
        store.replace(Layout::default(), MutationKind::Preview);
        assert_eq!(store.history().undo_len(), 1);
        assert!(store.layout().rooms.is_empty());
    }

    #[test]
    fn test_restoring_edits_do_not_record_history() {
        let mut store = LayoutStore::restoring();
        store.add_room(Room::new("A", 1.0, 0.0, 0.0));
        assert!(!store.history().can_undo());
        store.finish_restore();
        store.add_room(Room::new("B", 1.0, 0.0, 0.0));
        assert_eq!(store.history().undo_len(), 1);
    }

    #[test]
    fn test_set_meta_is_undoable() {
        let mut store = LayoutStore::new();
        store.set_meta("description", Value::from("Cabin"));
        assert_eq!(store.layout().description(), Some("Cabin"));
        store.undo();
        assert_eq!(store.layout().description(), None);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut store = LayoutStore::new();
        let added = store
            .apply(LayoutCommand::AddRoom(Room::new("Hall", 2.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(added, CommandOutcome::Added("Hall".into()));

        let edited = store
            .apply(LayoutCommand::EditRoom {
                name: "Hall".into(),
                edit: RoomEdit::Scale(2.0),
            })
            .unwrap();
        assert_eq!(edited, CommandOutcome::Edited("Hall".into()));

        let deleted = store
            .apply(LayoutCommand::DeleteRoom {
                name: "Hall".into(),
            })
            .unwrap();
        assert_eq!(deleted, CommandOutcome::Deleted("Hall".into()));

        let replaced = store
            .apply(LayoutCommand::Replace {
                layout: one_room(),
                kind: MutationKind::Load,
            })
            .unwrap();
        assert_eq!(replaced, CommandOutcome::Replaced(MutationKind::Load));
        assert_eq!(store.layout(), &one_room());
        assert!(!store.history().can_undo());
    }

    #[test]
    fn test_undo_history_is_bounded_in_store() {
        let mut store = LayoutStore::with_layout(one_room());
        for i in 0..(MAX_HISTORY + 20) {
            store.edit_room("A", RoomEdit::X(i as f64)).unwrap();
        }
        assert_eq!(store.history().undo_len(), MAX_HISTORY);
        let mut undone = 0;
        while store.undo() == HistoryStep::Applied {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY);
        // The oldest 20 states were evicted; the earliest reachable x is 19.
        assert_eq!(store.layout().rooms[0].x, 19.0);
    }
}
