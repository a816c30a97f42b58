/// Maximum number of snapshots kept on the undo stack.
pub const MAX_HISTORY: usize = 100;

/// Grid step used when snapping is switched on in the editor.
pub const DEFAULT_SNAP_STEP: f64 = 0.25;

/// Decimal places kept for committed positions.
pub const POSITION_DECIMALS: u32 = 3;
/// Decimal places kept for committed rotation and scale.
pub const ROTATION_DECIMALS: u32 = 5;

/// Absolute tolerance below which two numeric room fields compare equal.
pub const DIFF_EPSILON: f64 = 1e-4;

/// Name used for rooms added without a name.
pub const DEFAULT_ROOM_NAME: &str = "Room";

/// Recent notifications kept in `NotificationLog`.
pub const NOTIFICATION_LOG_CAPACITY: usize = 50;

// Floorplan export
/// Canvas margin around the rooms, in pixels.
pub const FLOORPLAN_PADDING: f64 = 20.0;
/// Pixels per layout unit.
pub const FLOORPLAN_SCALE: f64 = 80.0;
/// Smallest canvas width/height, in pixels.
pub const FLOORPLAN_MIN_CANVAS: f64 = 200.0;
/// Bounding box `(min_x, min_y, max_x, max_y)` used for a layout with no rooms.
pub const FLOORPLAN_EMPTY_BOUNDS: (f64, f64, f64, f64) = (0.0, 0.0, 10.0, 10.0);
