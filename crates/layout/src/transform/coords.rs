//! Conversions between a room's top-left representation and the
//! center-based pose a manipulation gizmo works in.
//!
//! The layout's logical `y` axis is the scene's depth (`z`) axis. This
//! mapping is applied the same way in both directions.

use crate::model::Room;

/// Center of a room's footprint on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomCenter {
    pub cx: f64,
    pub cz: f64,
}

/// Top-left corner in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopLeft {
    pub x: f64,
    pub y: f64,
}

pub fn to_center(room: &Room) -> RoomCenter {
    let half = room.size / 2.0;
    RoomCenter {
        cx: room.x + half,
        cz: room.y + half,
    }
}

pub fn from_center(cx: f64, cz: f64, size: f64) -> TopLeft {
    let half = size / 2.0;
    TopLeft {
        x: cx - half,
        y: cz - half,
    }
}

/// Quantize `value` to the nearest multiple of `step`. A zero (or non-finite)
/// step passes the value through.
pub fn snap(value: f64, step: f64) -> f64 {
    if step == 0.0 || !step.is_finite() {
        return value;
    }
    (value / step).round() * step
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_round_trip() {
        let room = Room::new("A", 4.0, 1.5, -2.0);
        let c = to_center(&room);
        assert_eq!(c, RoomCenter { cx: 3.5, cz: 0.0 });
        let tl = from_center(c.cx, c.cz, room.size);
        assert_eq!(tl, TopLeft { x: 1.5, y: -2.0 });
    }

    #[test]
    fn test_snap_zero_step_is_passthrough() {
        for v in [0.0, 0.1234, -7.77, 1e9] {
            assert_eq!(snap(v, 0.0), v);
        }
    }

    #[test]
    fn test_snap_quantizes_to_step() {
        assert_eq!(snap(0.3, 0.25), 0.25);
        assert_eq!(snap(0.38, 0.25), 0.5);
        assert_eq!(snap(-0.3, 0.25), -0.25);
        assert_eq!(snap(7.0, 2.0), 8.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let steps = [0.1, 0.25, 0.5, 1.0, 3.0];
        let values = [-12.345, -0.12, 0.0, 0.126, 3.999, 17.5, 1234.567];
        for &s in &steps {
            for &v in &values {
                let once = snap(v, s);
                assert_eq!(snap(once, s), once, "v={v} s={s}");
            }
        }
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(0.1 + 0.2, 3), 0.3);
        assert_eq!(round_to(std::f64::consts::PI, 5), 3.14159);
    }
}
