//! Runs `roomplan` commands against a headless editor app.
//!
//! The app carries the same plugins a windowed editor would (minus rendering)
//! so generated and imported layouts go through the store's load path.

use std::fs;
use std::io;
use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use layout::generator::{generate_layout, GenerationRequest};
use layout::{compute_diff, Layout, LayoutDiff, LayoutPlugin, LayoutStore};
use save::atomic_write::atomic_write;
use save::json_export::{export_json, import_json};
use save::svg_export::floorplan_svg;
use save::{PendingLayoutRestore, ProjectRequest, SaveError, SavePlugin};

fn editor_app(pending: PendingLayoutRestore) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.insert_resource(pending);
    app.add_plugins((LayoutPlugin, SavePlugin));
    // Startup + PostStartup: consume the hand-off, close the restore window.
    app.update();
    app
}

/// Read and decode a layout file. Errors name the file.
fn read_layout(path: &Path) -> Result<Layout, SaveError> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    import_json(&text).map_err(|e| match e {
        SaveError::Decode(msg) => SaveError::Decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Generate a starter layout and write it as JSON.
pub fn generate(request: GenerationRequest, out: &Path) -> Result<Layout, SaveError> {
    let mut app = editor_app(PendingLayoutRestore::default());
    app.world_mut()
        .send_event(ProjectRequest::LoadGenerated(generate_layout(&request)));
    app.update();

    let layout = app.world().resource::<LayoutStore>().layout().clone();
    atomic_write(out, export_json(&layout)?.as_bytes())?;
    info!(
        "Generated {} rooms ({} bedrooms, mood '{}') -> {}",
        layout.rooms.len(),
        request.bedrooms,
        request.mood,
        out.display()
    );
    Ok(layout)
}

/// Render a layout file as an SVG floorplan.
pub fn svg(input: &Path, out: &Path) -> Result<Layout, SaveError> {
    // Validate up front: the startup hand-off would silently fall back to an
    // empty layout.
    let layout = read_layout(input)?;
    let app = editor_app(PendingLayoutRestore {
        layout: Some(export_json(&layout)?),
        project_id: None,
    });
    let layout = app.world().resource::<LayoutStore>().layout().clone();
    atomic_write(out, floorplan_svg(&layout).as_bytes())?;
    info!(
        "Floorplan of {} rooms written to {}",
        layout.rooms.len(),
        out.display()
    );
    Ok(layout)
}

/// Diff two layout files, logging the report and optionally writing it.
///
/// The left file is opened in the editor and the right one compared against
/// the editor's layout.
pub fn diff(left: &Path, right: &Path, out: Option<&Path>) -> Result<LayoutDiff, SaveError> {
    let left = read_layout(left)?;
    let right = read_layout(right)?;
    let app = editor_app(PendingLayoutRestore {
        layout: Some(export_json(&left)?),
        project_id: None,
    });
    let diff = compute_diff(app.world().resource::<LayoutStore>().layout(), &right);
    info!("{}", diff.summary());
    for room in &diff.added {
        info!("  + {}", room.name);
    }
    for room in &diff.removed {
        info!("  - {}", room.name);
    }
    for modified in &diff.modified {
        for (field, change) in &modified.changes {
            info!(
                "  ~ {}.{field}: {} -> {}",
                modified.name,
                change.before(),
                change.after()
            );
        }
    }
    if let Some(out) = out {
        let body =
            serde_json::to_string_pretty(&diff).map_err(|e| SaveError::Encode(e.to_string()))?;
        atomic_write(out, body.as_bytes())?;
        info!("Diff report written to {}", out.display());
    }
    Ok(diff)
}
