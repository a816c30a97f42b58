//! Scaled SVG floorplan export.
//!
//! One bounding-box pass over the rooms fixes the canvas; each room becomes
//! a rectangle with a centered name label and a corner size label. A layout
//! with no rooms renders the default box so the output is always a
//! well-formed document.

use std::fmt::Write;

use layout::config::{
    FLOORPLAN_EMPTY_BOUNDS, FLOORPLAN_MIN_CANVAS, FLOORPLAN_PADDING, FLOORPLAN_SCALE,
};
use layout::{Layout, Room};

/// Vertical space below the rooms reserved for the legend.
const LEGEND_BAND: f64 = 60.0;

/// Axis-aligned extent of a layout, in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box over every room's footprint, or the default box when
    /// there are no rooms.
    pub fn of(layout: &Layout) -> Self {
        let mut rooms = layout.rooms.iter();
        let Some(first) = rooms.next() else {
            let (min_x, min_y, max_x, max_y) = FLOORPLAN_EMPTY_BOUNDS;
            return Self {
                min_x,
                min_y,
                max_x,
                max_y,
            };
        };
        let side = drawn_size(first);
        let start = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x + side,
            max_y: first.y + side,
        };
        rooms.fold(start, |b, room| {
            let side = drawn_size(room);
            Self {
                min_x: b.min_x.min(room.x),
                min_y: b.min_y.min(room.y),
                max_x: b.max_x.max(room.x + side),
                max_y: b.max_y.max(room.y + side),
            }
        })
    }
}

/// Pixel geometry derived from the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub bounds: Bounds,
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn for_layout(layout: &Layout) -> Self {
        let bounds = Bounds::of(layout);
        let extent = |span: f64| {
            ((span * FLOORPLAN_SCALE).ceil() + FLOORPLAN_PADDING * 2.0).max(FLOORPLAN_MIN_CANVAS)
        };
        Self {
            bounds,
            width: extent(bounds.max_x - bounds.min_x),
            height: extent(bounds.max_y - bounds.min_y),
        }
    }

    pub fn project_x(&self, x: f64) -> f64 {
        ((x - self.bounds.min_x) * FLOORPLAN_SCALE).round() + FLOORPLAN_PADDING
    }

    pub fn project_y(&self, y: f64) -> f64 {
        ((y - self.bounds.min_y) * FLOORPLAN_SCALE).round() + FLOORPLAN_PADDING
    }
}

/// Rooms with no usable size are drawn one unit wide.
fn drawn_size(room: &Room) -> f64 {
    if room.size == 0.0 || !room.size.is_finite() {
        1.0
    } else {
        room.size
    }
}

/// Escape the five reserved XML characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the layout as a standalone SVG document.
pub fn floorplan_svg(layout: &Layout) -> String {
    let canvas = Canvas::for_layout(layout);
    let padding = FLOORPLAN_PADDING;
    let total_height = canvas.height + LEGEND_BAND;
    let name_font = (FLOORPLAN_SCALE / 6.0).round().max(10.0);

    let mut rooms = String::new();
    for room in &layout.rooms {
        let side = drawn_size(room);
        let sx = canvas.project_x(room.x);
        let sy = canvas.project_y(room.y);
        let sw = (side * FLOORPLAN_SCALE).round().max(1.0);
        let sh = sw;
        writeln!(
            rooms,
            "    <rect x=\"{sx}\" y=\"{sy}\" width=\"{sw}\" height=\"{sh}\" \
             fill=\"rgba(58, 141, 255, 0.12)\" stroke=\"#2A8BFF\" stroke-width=\"2\" />"
        )
        .ok();
        writeln!(
            rooms,
            "    <text x=\"{}\" y=\"{}\" font-family=\"Arial\" font-size=\"{name_font}\" \
             fill=\"#0b1723\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
            sx + sw / 2.0,
            sy + sh / 2.0,
            escape_xml(&room.name),
        )
        .ok();
        writeln!(
            rooms,
            "    <text x=\"{}\" y=\"{}\" font-family=\"Arial\" font-size=\"10\" \
             fill=\"#243444\">{side} m</text>",
            sx + 6.0,
            sy + sh - 6.0,
        )
        .ok();
    }

    let title = escape_xml(layout.description().unwrap_or("Floorplan"));
    let legend = escape_xml(&format!(
        "Scale: 1 unit = 1 m, {FLOORPLAN_SCALE}px per m"
    ));
    let width = canvas.width;

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{total_height}\" \
         viewBox=\"0 0 {width} {total_height}\">\n\
         \x20 <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n\
         \x20 <g transform=\"translate(0,0)\">\n\
         \x20   <text x=\"{padding}\" y=\"{}\" font-family=\"Arial\" font-size=\"18\" fill=\"#0b1723\">{title}</text>\n\
         {rooms}\
         \x20   <text x=\"{padding}\" y=\"{}\" font-family=\"Arial\" font-size=\"12\" fill=\"#444\">{legend}</text>\n\
         \x20 </g>\n\
         </svg>\n",
        padding - 4.0,
        canvas.height + 30.0,
    )
}
