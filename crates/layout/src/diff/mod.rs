//! Structural comparison of two layout snapshots.
//!
//! Rooms are joined by name. A room only in the right-hand layout is
//! `added`, only in the left-hand one `removed`; rooms in both are compared
//! field by field with an absolute tolerance of `DIFF_EPSILON` so that
//! rounding noise from gestures and snapping is not reported. A rename shows
//! up as one removal plus one addition.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::DIFF_EPSILON;
use crate::model::{Layout, Room, RoomField};

#[cfg(test)]
mod tests;

/// A field that differs between two snapshots: `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldChange(pub f64, pub f64);

impl FieldChange {
    pub fn before(&self) -> f64 {
        self.0
    }

    pub fn after(&self) -> f64 {
        self.1
    }

    pub fn inverted(self) -> Self {
        Self(self.1, self.0)
    }
}

/// A room present on both sides with at least one changed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedRoom {
    pub name: String,
    pub changes: BTreeMap<RoomField, FieldChange>,
    pub from: Room,
    pub to: Room,
}

/// Added / removed / modified report between two layouts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDiff {
    pub added: Vec<Room>,
    pub removed: Vec<Room>,
    pub modified: Vec<ModifiedRoom>,
}

impl LayoutDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// The diff of the same two layouts taken in the opposite direction.
    pub fn inverted(self) -> Self {
        Self {
            added: self.removed,
            removed: self.added,
            modified: self
                .modified
                .into_iter()
                .map(|m| ModifiedRoom {
                    name: m.name,
                    changes: m
                        .changes
                        .into_iter()
                        .map(|(field, change)| (field, change.inverted()))
                        .collect(),
                    from: m.to,
                    to: m.from,
                })
                .collect(),
        }
    }

    /// One-line human summary, e.g. `"+1 added, -0 removed, ~2 modified"`.
    pub fn summary(&self) -> String {
        format!(
            "+{} added, -{} removed, ~{} modified",
            self.added.len(),
            self.removed.len(),
            self.modified.len()
        )
    }
}

/// Whether two field values differ by more than the comparison tolerance.
pub fn differs(a: f64, b: f64) -> bool {
    (a - b).abs() > DIFF_EPSILON
}

/// Rooms keyed by name, in first-appearance order. A repeated name keeps the
/// last room seen.
fn index_by_name(layout: &Layout) -> (Vec<&str>, HashMap<&str, &Room>) {
    let mut order = Vec::with_capacity(layout.rooms.len());
    let mut seen = HashSet::with_capacity(layout.rooms.len());
    let mut by_name = HashMap::with_capacity(layout.rooms.len());
    for room in &layout.rooms {
        let name = room.name.as_str();
        if seen.insert(name) {
            order.push(name);
        }
        by_name.insert(name, room);
    }
    (order, by_name)
}

/// Compare `a` (before) with `b` (after).
pub fn compute_diff(a: &Layout, b: &Layout) -> LayoutDiff {
    let (order_a, map_a) = index_by_name(a);
    let (order_b, map_b) = index_by_name(b);

    let added = order_b
        .iter()
        .filter(|name| !map_a.contains_key(*name))
        .map(|name| map_b[name].clone())
        .collect();

    let removed = order_a
        .iter()
        .filter(|name| !map_b.contains_key(*name))
        .map(|name| map_a[name].clone())
        .collect();

    let modified = order_a
        .iter()
        .filter_map(|name| {
            let from = map_a[name];
            let to = map_b.get(name)?;
            let changes: BTreeMap<_, _> = RoomField::ALL
                .into_iter()
                .filter_map(|field| {
                    let (old, new) = (from.field(field), to.field(field));
                    differs(old, new).then_some((field, FieldChange(old, new)))
                })
                .collect();
            (!changes.is_empty()).then(|| ModifiedRoom {
                name: (*name).to_string(),
                changes,
                from: from.clone(),
                to: (*to).clone(),
            })
        })
        .collect();

    LayoutDiff {
        added,
        removed,
        modified,
    }
}
