//! JSON export and import of a layout.
//!
//! Export is the identity encoding (pretty-printed). Import is lenient the
//! way the editor's form fields are: numeric room fields given as strings
//! are parsed, `null` or unparseable values fall back to the field default,
//! and non-string names are stringified. Anything that is not a layout
//! object at all is a `SaveError::Decode`.

use bevy::prelude::*;
use serde_json::{Map, Value};

use layout::{Layout, RoomField};

use crate::save_error::SaveError;

/// Serialize `layout` verbatim as pretty-printed JSON.
pub fn export_json(layout: &Layout) -> Result<String, SaveError> {
    serde_json::to_string_pretty(layout).map_err(|e| SaveError::Encode(e.to_string()))
}

/// Parse a layout, coercing loosely typed room fields.
pub fn import_json(text: &str) -> Result<Layout, SaveError> {
    let mut value: Value = serde_json::from_str(text)?;
    let Some(object) = value.as_object_mut() else {
        return Err(SaveError::Decode("layout must be a JSON object".into()));
    };
    if let Some(Value::Array(rooms)) = object.get_mut("rooms") {
        for room in rooms.iter_mut().filter_map(Value::as_object_mut) {
            coerce_room(room);
        }
    }
    if object.get("meta").is_some_and(Value::is_null) {
        object.remove("meta");
    }
    let layout: Layout = serde_json::from_value(value)?;
    Ok(layout.sanitized())
}

/// Parse a persisted layout, falling back to the empty layout on failure.
pub fn restore_or_default(text: &str) -> Layout {
    match import_json(text) {
        Ok(layout) => layout,
        Err(e) => {
            warn!("Ignoring malformed persisted layout: {e}");
            Layout::default()
        }
    }
}

fn coerce_room(room: &mut Map<String, Value>) {
    for field in RoomField::ALL {
        let key = field.key();
        let coerced = match room.get(key) {
            None | Some(Value::Number(_)) => continue,
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().and_then(serde_json::Number::from_f64),
            Some(Value::Bool(b)) => serde_json::Number::from_f64(if *b { 1.0 } else { 0.0 }),
            Some(_) => None,
        };
        match coerced {
            Some(number) => {
                room.insert(key.to_string(), Value::Number(number));
            }
            None => {
                room.remove(key);
            }
        }
    }
    let name = match room.get("name") {
        Some(Value::String(_)) | None => return,
        Some(Value::Null) => None,
        Some(other) => Some(other.to_string()),
    };
    match name {
        Some(name) => room.insert("name".to_string(), Value::String(name)),
        None => room.remove("name"),
    };
}
