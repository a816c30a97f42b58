//! Rule-based starter layouts.
//!
//! Places a living room at the origin, the kitchen to its right, and one
//! bedroom/bathroom pair per requested bedroom stacked below with a half-unit
//! gap. Mood and description keywords only add suggestion notes to the
//! metadata. The output is a plain `Layout` that callers load wholesale.

use serde_json::{Map, Value};

use crate::model::{Layout, Room};

const LIVING_SIZE: f64 = 5.0;
const KITCHEN_SIZE: f64 = 3.5;
const BEDROOM_SIZE: f64 = 3.5;
const BATHROOM_SIZE: f64 = 2.0;
const ROW_GAP: f64 = 0.5;

/// Inputs of the preference form.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub description: String,
    pub mood: String,
    pub bedrooms: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            mood: "cozy".to_string(),
            bedrooms: 2,
        }
    }
}

/// Build a starter layout. At least one bedroom is always placed.
pub fn generate_layout(request: &GenerationRequest) -> Layout {
    let mut rooms = vec![
        Room::new("Living Room", LIVING_SIZE, 0.0, 0.0),
        Room::new("Kitchen", KITCHEN_SIZE, LIVING_SIZE, 0.0),
    ];

    for i in 0..request.bedrooms.max(1) {
        let y = f64::from(i + 1) * (BEDROOM_SIZE + ROW_GAP);
        rooms.push(Room::new(format!("Bedroom {}", i + 1), BEDROOM_SIZE, 0.0, y));
        rooms.push(Room::new(
            format!("Bathroom {}", i + 1),
            BATHROOM_SIZE,
            BEDROOM_SIZE + ROW_GAP,
            y,
        ));
    }

    let mut meta = Map::new();
    meta.insert("description".into(), Value::from(request.description.clone()));
    meta.insert("mood".into(), Value::from(request.mood.clone()));
    meta.insert("bedrooms".into(), Value::from(request.bedrooms));
    meta.insert(
        "notes".into(),
        Value::from(suggestion_notes(&request.description, &request.mood)),
    );

    Layout { rooms, meta }
}

fn suggestion_notes(description: &str, mood: &str) -> Vec<&'static str> {
    let d = description.to_lowercase();
    let m = mood.to_lowercase();
    let mut notes = Vec::new();
    if m.contains("eco") || d.contains("eco") || d.contains("green") {
        notes.push("Suggest solar panels / green roof");
    }
    if m.contains("modern") || d.contains("modern") {
        notes.push("Suggest open-plan living, large windows");
    }
    if m.contains("cozy") || d.contains("cozy") {
        notes.push("Suggest fireplace / warm lighting");
    }
    notes
}
