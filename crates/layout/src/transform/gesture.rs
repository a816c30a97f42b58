//! Gesture tracking: continuous manipulation frames are buffered and only
//! the terminal event produces a store mutation, so one gesture is one undo
//! step no matter how many frames were rendered.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::{POSITION_DECIMALS, ROTATION_DECIMALS};
use crate::model::Room;
use crate::settings::EditorSettings;
use crate::store::{LayoutCommand, LayoutStore};

use super::coords::{from_center, round_to, snap, to_center};

/// Height of the room boxes above the ground plane, used when placing a
/// gizmo on a room.
pub const GIZMO_HEIGHT: f64 = 0.5;

// ---------------------------------------------------------------------------
// Gizmo pose
// ---------------------------------------------------------------------------

/// Center-based pose reported by a manipulation gizmo. Held in double
/// precision so large layout coordinates keep their committed decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoTransform {
    /// Scene-space center. `x` is layout `x`, `z` is layout `y`.
    pub translation: DVec3,
    /// Yaw in radians.
    pub rotation_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl GizmoTransform {
    /// Pose of the gizmo attached to `room`.
    pub fn for_room(room: &Room) -> Self {
        let center = to_center(room);
        Self {
            translation: DVec3::new(center.cx, GIZMO_HEIGHT, center.cz),
            rotation_y: room.rotation_y,
            scale: room.scale,
        }
    }

    /// Read the pose from a scene `Transform`: yaw about the vertical axis and
    /// the `x` component of scale.
    pub fn from_transform(transform: &Transform) -> Self {
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        Self {
            translation: transform.translation.as_dvec3(),
            rotation_y: f64::from(yaw),
            scale: f64::from(transform.scale.x),
        }
    }
}

// ---------------------------------------------------------------------------
// Commit
// ---------------------------------------------------------------------------

/// Final logical pose written to a room when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCommit {
    pub x: f64,
    pub y: f64,
    pub rotation_y: f64,
    pub scale: f64,
}

impl TransformCommit {
    /// Convert a gizmo pose to top-left coordinates for a room of `size`.
    ///
    /// `x`/`y` are snapped to `snap_step` (0 disables snapping) and rounded to
    /// `POSITION_DECIMALS`; rotation and scale are never snapped and are
    /// rounded to `ROTATION_DECIMALS`.
    pub fn from_gizmo(gizmo: &GizmoTransform, size: f64, snap_step: f64) -> Self {
        let top_left = from_center(gizmo.translation.x, gizmo.translation.z, size);
        Self {
            x: round_to(snap(top_left.x, snap_step), POSITION_DECIMALS),
            y: round_to(snap(top_left.y, snap_step), POSITION_DECIMALS),
            rotation_y: round_to(gizmo.rotation_y, ROTATION_DECIMALS),
            scale: round_to(gizmo.scale, ROTATION_DECIMALS),
        }
    }

    pub fn apply_to(&self, room: &mut Room) {
        room.x = self.x;
        room.y = self.y;
        room.rotation_y = self.rotation_y;
        room.scale = self.scale;
    }
}

// ---------------------------------------------------------------------------
// Gesture events + tracker
// ---------------------------------------------------------------------------

/// Input from the 3D view's manipulation gizmo.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// A drag started on the named room.
    Begin { room: String },
    /// An intermediate pose. Never reaches the store on its own.
    Frame(GizmoTransform),
    /// The drag finished; commit the last pose.
    End,
    /// The drag was abandoned; commit nothing.
    Cancel,
}

/// The gesture currently in flight, if any.
#[derive(Resource, Debug, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

#[derive(Debug)]
struct ActiveGesture {
    room: String,
    last: Option<GizmoTransform>,
}

impl GestureTracker {
    pub fn begin(&mut self, room: impl Into<String>) {
        self.active = Some(ActiveGesture {
            room: room.into(),
            last: None,
        });
    }

    /// Record an intermediate pose. Ignored when no gesture is active.
    pub fn frame(&mut self, pose: GizmoTransform) {
        if let Some(active) = self.active.as_mut() {
            active.last = Some(pose);
        }
    }

    /// Finish the gesture, returning the room and its final pose. A gesture
    /// that never produced a frame yields `None`.
    pub fn end(&mut self) -> Option<(String, GizmoTransform)> {
        let active = self.active.take()?;
        active.last.map(|pose| (active.room, pose))
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn room(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.room.as_str())
    }
}

/// System that feeds gesture events through the tracker and emits exactly
/// one `CommitTransform` per completed gesture.
pub fn track_gestures(
    mut events: EventReader<GestureEvent>,
    mut tracker: ResMut<GestureTracker>,
    store: Res<LayoutStore>,
    settings: Res<EditorSettings>,
    mut commands: EventWriter<LayoutCommand>,
) {
    for event in events.read() {
        match event {
            GestureEvent::Begin { room } => tracker.begin(room.clone()),
            GestureEvent::Frame(pose) => tracker.frame(*pose),
            GestureEvent::Cancel => tracker.cancel(),
            GestureEvent::End => {
                let Some((name, pose)) = tracker.end() else {
                    continue;
                };
                let Some(room) = store.layout().room(&name) else {
                    warn!("Gesture ended on room '{name}' which no longer exists");
                    continue;
                };
                let commit = TransformCommit::from_gizmo(&pose, room.size, settings.snap_step());
                debug!("Committing gesture on '{name}': {commit:?}");
                commands.send(LayoutCommand::CommitTransform { name, commit });
            }
        }
    }
}
