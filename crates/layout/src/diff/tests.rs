use std::collections::BTreeSet;

use super::*;

fn room(name: &str, x: f64, y: f64, size: f64) -> Room {
    Room::new(name, size, x, y)
}

fn names(rooms: &[Room]) -> BTreeSet<String> {
    rooms.iter().map(|r| r.name.clone()).collect()
}

fn sample_pair() -> (Layout, Layout) {
    let a = Layout::new(vec![
        room("Living Room", 0.0, 0.0, 5.0),
        room("Kitchen", 5.0, 0.0, 3.5),
        room("Bedroom 1", 0.0, 4.0, 3.5),
    ]);
    let mut moved = room("Kitchen", 6.0, 0.0, 3.5);
    moved.rotation_y = 1.5708;
    let b = Layout::new(vec![
        room("Living Room", 0.0, 0.0, 5.0),
        moved,
        room("Study", 0.0, 8.0, 2.0),
    ]);
    (a, b)
}

#[test]
fn test_identical_layouts_have_empty_diff() {
    let (a, b) = sample_pair();
    assert!(compute_diff(&a, &a).is_empty());
    assert!(compute_diff(&b, &b).is_empty());
    assert!(compute_diff(&Layout::default(), &Layout::default()).is_empty());
}

#[test]
fn test_added_removed_and_modified() {
    let (a, b) = sample_pair();
    let diff = compute_diff(&a, &b);

    assert_eq!(diff.added, vec![room("Study", 0.0, 8.0, 2.0)]);
    assert_eq!(diff.removed, vec![room("Bedroom 1", 0.0, 4.0, 3.5)]);
    assert_eq!(diff.modified.len(), 1);

    let kitchen = &diff.modified[0];
    assert_eq!(kitchen.name, "Kitchen");
    assert_eq!(kitchen.changes.len(), 2);
    assert_eq!(kitchen.changes[&RoomField::X], FieldChange(5.0, 6.0));
    assert_eq!(kitchen.changes[&RoomField::RotationY], FieldChange(0.0, 1.5708));
    assert_eq!(kitchen.from.x, 5.0);
    assert_eq!(kitchen.to.x, 6.0);
}

#[test]
fn test_tolerance_absorbs_rounding_noise() {
    let a = Layout::new(vec![room("A", 1.0, 1.0, 2.0)]);
    let b = Layout::new(vec![room("A", 1.00005, 0.99996, 2.0)]);
    assert!(compute_diff(&a, &b).is_empty());

    let c = Layout::new(vec![room("A", 1.0002, 1.0, 2.0)]);
    let diff = compute_diff(&a, &c);
    assert_eq!(diff.modified.len(), 1);
    assert!(diff.modified[0].changes.contains_key(&RoomField::X));
}

#[test]
fn test_rename_is_remove_plus_add() {
    let a = Layout::new(vec![room("Den", 0.0, 0.0, 3.0)]);
    let b = Layout::new(vec![room("Office", 0.0, 0.0, 3.0)]);
    let diff = compute_diff(&a, &b);
    assert_eq!(names(&diff.removed), BTreeSet::from(["Den".to_string()]));
    assert_eq!(names(&diff.added), BTreeSet::from(["Office".to_string()]));
    assert!(diff.modified.is_empty());
}

#[test]
fn test_swapping_arguments_mirrors_diff() {
    let (a, b) = sample_pair();
    let forward = compute_diff(&a, &b);
    let backward = compute_diff(&b, &a);

    assert_eq!(names(&forward.added), names(&backward.removed));
    assert_eq!(names(&forward.removed), names(&backward.added));
    assert_eq!(forward.clone().inverted(), backward);

    let fk = &forward.modified[0];
    let bk = &backward.modified[0];
    for (field, change) in &fk.changes {
        assert_eq!(bk.changes[field], change.inverted());
    }
    assert_eq!(fk.from, bk.to);
    assert_eq!(fk.to, bk.from);
}

#[test]
fn test_duplicate_names_keep_last_room() {
    let a = Layout::new(vec![room("A", 0.0, 0.0, 1.0), room("A", 9.0, 0.0, 1.0)]);
    let b = Layout::new(vec![room("A", 9.0, 0.0, 1.0)]);
    assert!(compute_diff(&a, &b).is_empty());
}

#[test]
fn test_missing_fields_default_before_comparison() {
    let a: Layout = serde_json::from_str(r#"{"rooms":[{"name":"A","size":2,"x":1,"y":1}]}"#).unwrap();
    let b: Layout = serde_json::from_str(
        r#"{"rooms":[{"name":"A","size":2,"x":1,"y":1,"rotationY":0,"scale":1}],"meta":{}}"#,
    )
    .unwrap();
    assert!(compute_diff(&a, &b).is_empty());
}

#[test]
fn test_report_serializes_changes_as_pairs() {
    let (a, b) = sample_pair();
    let json = serde_json::to_value(compute_diff(&a, &b)).unwrap();
    assert_eq!(json["modified"][0]["changes"]["x"], serde_json::json!([5.0, 6.0]));
    assert_eq!(json["added"][0]["name"], "Study");
    assert_eq!(json["removed"][0]["name"], "Bedroom 1");
}

#[test]
fn test_summary_counts() {
    let (a, b) = sample_pair();
    assert_eq!(
        compute_diff(&a, &b).summary(),
        "+1 added, -1 removed, ~1 modified"
    );
}
