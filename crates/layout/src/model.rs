//! Room and layout data model.
//!
//! A `Layout` is an ordered list of square `Room` footprints plus a free-form
//! JSON metadata object. Room names are the identity key: the store keeps
//! them unique by suffixing a numeric disambiguator on insertion.
//!
//! Every numeric field carries a serde default so snapshots produced by older
//! clients (which only wrote `name`, `size`, `x`, `y`) still load.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEFAULT_ROOM_NAME;

// =============================================================================
// Room
// =============================================================================

fn default_scale() -> f64 {
    1.0
}

/// One named square footprint. `x, y` is the top-left corner in layout units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Rotation about the vertical axis, in radians.
    #[serde(default, rename = "rotationY")]
    pub rotation_y: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Room {
    /// A room at `(x, y)` with no rotation and unit scale.
    pub fn new(name: impl Into<String>, size: f64, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            size,
            x,
            y,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }

    /// Read a numeric field by tag.
    pub fn field(&self, field: RoomField) -> f64 {
        match field {
            RoomField::X => self.x,
            RoomField::Y => self.y,
            RoomField::Size => self.size,
            RoomField::RotationY => self.rotation_y,
            RoomField::Scale => self.scale,
        }
    }

    /// Write a numeric field by tag, coercing non-finite input to `0`.
    pub fn set_field(&mut self, field: RoomField, value: f64) {
        let value = finite_or_zero(value);
        match field {
            RoomField::X => self.x = value,
            RoomField::Y => self.y = value,
            RoomField::Size => self.size = value,
            RoomField::RotationY => self.rotation_y = value,
            RoomField::Scale => self.scale = value,
        }
    }

    /// Coerce every numeric field to a finite value. Names pass through.
    pub fn sanitized(mut self) -> Self {
        for field in RoomField::ALL {
            let value = self.field(field);
            self.set_field(field, value);
        }
        self
    }
}

/// Numeric room fields, in the order they are compared and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomField {
    X,
    Y,
    Size,
    RotationY,
    Scale,
}

impl RoomField {
    pub const ALL: [RoomField; 5] = [
        RoomField::X,
        RoomField::Y,
        RoomField::Size,
        RoomField::RotationY,
        RoomField::Scale,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            RoomField::X => "x",
            RoomField::Y => "y",
            RoomField::Size => "size",
            RoomField::RotationY => "rotationY",
            RoomField::Scale => "scale",
        }
    }
}

impl fmt::Display for RoomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns `value` when finite, otherwise `0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Layout
// =============================================================================

/// The full set of rooms plus metadata being edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl Layout {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            meta: Map::new(),
        }
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.room(name).is_some()
    }

    /// The `description` metadata entry, when it is a non-empty string.
    pub fn description(&self) -> Option<&str> {
        self.meta
            .get("description")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Coerce every room's numeric fields to finite values.
    pub fn sanitized(mut self) -> Self {
        self.rooms = self.rooms.into_iter().map(Room::sanitized).collect();
        self
    }

    /// First free name derived from `base`: `base`, `base 2`, `base 3`, ...
    ///
    /// An empty base falls back to `"Room"`.
    pub fn unique_room_name(&self, base: &str) -> String {
        self.first_free_name(base, None)
    }

    /// Name the room called `current` would get when renamed to `base`. The
    /// room's own name does not count as taken.
    pub fn unique_rename(&self, current: &str, base: &str) -> String {
        self.first_free_name(base, Some(current))
    }

    fn first_free_name(&self, base: &str, ignore: Option<&str>) -> String {
        let base = if base.is_empty() {
            DEFAULT_ROOM_NAME
        } else {
            base
        };
        let taken = |candidate: &str| {
            self.rooms
                .iter()
                .any(|r| r.name == candidate && Some(r.name.as_str()) != ignore)
        };
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while taken(&candidate) {
            suffix += 1;
            candidate = format!("{base} {suffix}");
        }
        candidate
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors reported by layout mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The command named a room that is not in the current layout.
    UnknownRoom(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownRoom(name) => write!(f, "No room named '{name}' in the layout"),
        }
    }
}

impl std::error::Error for LayoutError {}
