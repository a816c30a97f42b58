//! Coordinate transform between stored rooms and the 3D manipulation gizmo,
//! plus the one-mutation-per-gesture commit protocol.

pub mod coords;
pub mod gesture;

pub use coords::{from_center, round_to, snap, to_center, RoomCenter, TopLeft};
pub use gesture::{track_gestures, GestureEvent, GestureTracker, GizmoTransform, TransformCommit};
