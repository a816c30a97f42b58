use std::path::PathBuf;

use bevy::prelude::*;

use layout::notifications::{collect_notifications, EditorNotification};
use layout::selection::SelectedRoom;
use layout::store::{process_redo, LayoutStore};
use layout::{EditorSet, Layout, MutationKind};

use crate::backend::ProjectBackend;
use crate::export::{write_export, ExportKind};
use crate::json_export::restore_or_default;
use crate::memory_backend::InMemoryBackend;
use crate::save_error::SaveError;
use crate::session::{ProjectSession, Replacement, SaveOutcome};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The project service the editor talks to.
#[derive(Resource)]
pub struct BackendHandle(pub Box<dyn ProjectBackend>);

impl BackendHandle {
    pub fn new(backend: impl ProjectBackend + 'static) -> Self {
        Self(Box::new(backend))
    }
}

/// Layout (and project id) handed over by whatever opened the editor.
/// Consumed once at startup.
#[derive(Resource, Debug, Default, Clone)]
pub struct PendingLayoutRestore {
    pub layout: Option<String>,
    pub project_id: Option<String>,
}

/// Where exported artifacts are written.
#[derive(Resource, Debug, Clone)]
pub struct ExportSettings {
    pub dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("exports"),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Project and version operations requested by the UI.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum ProjectRequest {
    Open { id: String },
    Save { name: String, thumbnail: Option<String> },
    RefreshVersions,
    Preview { version: String },
    CancelPreview,
    Revert { version: String },
    Compare { left: String, right: String },
    SwapCompare,
    CloseCompare,
    /// Install a layout produced by the generator.
    LoadGenerated(Layout),
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest(pub ExportKind);

/// Sent after an artifact reached disk.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ExportWritten {
    pub kind: ExportKind,
    pub path: PathBuf,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<BackendHandle>() {
            app.insert_resource(BackendHandle::new(InMemoryBackend::new()));
        }

        app.add_event::<ProjectRequest>()
            .add_event::<ExportRequest>()
            .add_event::<ExportWritten>()
            .init_resource::<ProjectSession>()
            .init_resource::<PendingLayoutRestore>()
            .init_resource::<ExportSettings>();

        // Runs inside the store's restore window, so the hand-off is not
        // undoable.
        app.add_systems(Startup, restore_pending_layout);

        app.add_systems(
            Update,
            (
                handle_project_requests
                    .in_set(EditorSet::Apply)
                    .after(process_redo),
                handle_export_requests
                    .in_set(EditorSet::React)
                    .before(collect_notifications),
            ),
        );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Parses the pending layout hand-off. A malformed layout is logged and the
/// empty layout loaded in its place.
fn restore_pending_layout(
    mut pending: ResMut<PendingLayoutRestore>,
    mut store: ResMut<LayoutStore>,
    mut session: ResMut<ProjectSession>,
) {
    if let Some(text) = pending.layout.take() {
        let layout = restore_or_default(&text);
        info!("Restored layout with {} rooms", layout.rooms.len());
        store.replace(layout, MutationKind::Load);
    }
    if let Some(id) = pending.project_id.take() {
        session.adopt(id, store.layout());
    }
}

/// What a handled request produced.
struct Handled {
    replacement: Option<Replacement>,
    message: Option<EditorNotification>,
}

impl Handled {
    fn replaced(replacement: Replacement, message: EditorNotification) -> Self {
        Self {
            replacement: Some(replacement),
            message: Some(message),
        }
    }

    fn message(message: EditorNotification) -> Self {
        Self {
            replacement: None,
            message: Some(message),
        }
    }

    fn nothing() -> Self {
        Self {
            replacement: None,
            message: None,
        }
    }
}

fn failure_label(request: &ProjectRequest) -> &'static str {
    match request {
        ProjectRequest::Open { .. } => "Open",
        ProjectRequest::Save { .. } => "Save",
        ProjectRequest::RefreshVersions => "Fetching versions",
        ProjectRequest::Preview { .. } => "Preview",
        ProjectRequest::Revert { .. } => "Revert",
        ProjectRequest::Compare { .. } => "Compare",
        ProjectRequest::CancelPreview
        | ProjectRequest::SwapCompare
        | ProjectRequest::CloseCompare
        | ProjectRequest::LoadGenerated(_) => "Request",
    }
}

fn run_request(
    request: &ProjectRequest,
    backend: &dyn ProjectBackend,
    session: &mut ProjectSession,
    current: &Layout,
) -> Result<Handled, SaveError> {
    let handled = match request {
        ProjectRequest::Open { id } => {
            let replacement = session.open_project(backend, id)?;
            let name = session.project_name().unwrap_or(id.as_str()).to_string();
            Handled::replaced(
                replacement,
                EditorNotification::positive(format!("Opened project {name}")),
            )
        }
        ProjectRequest::Save { name, thumbnail } => {
            let text = match session.save_project(backend, name, current, thumbnail.clone())? {
                SaveOutcome::Created(id) => format!("Saved. id: {id}"),
                SaveOutcome::Updated(_) => "Project updated.".to_string(),
            };
            Handled::message(EditorNotification::positive(text))
        }
        ProjectRequest::RefreshVersions => {
            let count = session.refresh_versions(backend)?.len();
            let text = if count == 0 {
                "No versions found.".to_string()
            } else {
                format!("{count} versions")
            };
            Handled::message(EditorNotification::info(text))
        }
        ProjectRequest::Preview { version } => Handled::replaced(
            session.preview_version(backend, version, current)?,
            EditorNotification::info(format!("Previewing version {version}")),
        ),
        ProjectRequest::CancelPreview => match session.cancel_preview() {
            Some(replacement) => Handled {
                replacement: Some(replacement),
                message: None,
            },
            None => Handled::nothing(),
        },
        ProjectRequest::Revert { version } => Handled::replaced(
            session.revert_to_version(backend, version)?,
            EditorNotification::positive(format!("Reverted to version {version}")),
        ),
        ProjectRequest::Compare { left, right } => {
            let summary = session.compare_versions(backend, left, right)?.diff.summary();
            Handled::message(EditorNotification::info(summary))
        }
        ProjectRequest::SwapCompare => {
            session.swap_compare();
            Handled::nothing()
        }
        ProjectRequest::CloseCompare => {
            session.close_compare();
            Handled::nothing()
        }
        ProjectRequest::LoadGenerated(layout) => Handled::replaced(
            session.load_generated(layout.clone()),
            EditorNotification::info("Generated layout loaded"),
        ),
    };
    Ok(handled)
}

/// Runs project requests against the backend. Successful replacements go
/// through the store's wholesale `Replace`; failures become warnings and
/// leave the layout untouched.
fn handle_project_requests(
    mut requests: EventReader<ProjectRequest>,
    backend: Res<BackendHandle>,
    mut session: ResMut<ProjectSession>,
    mut store: ResMut<LayoutStore>,
    mut selected: ResMut<SelectedRoom>,
    mut notifications: EventWriter<EditorNotification>,
) {
    for request in requests.read() {
        let handled = match run_request(request, backend.0.as_ref(), &mut session, store.layout()) {
            Ok(handled) => handled,
            Err(e) => {
                let msg = format!("{} failed: {e}", failure_label(request));
                error!("{msg}");
                notifications.send(EditorNotification::warning(msg));
                continue;
            }
        };
        if let Some(replacement) = handled.replacement {
            match store.apply(replacement.into_command()) {
                Ok(outcome) => selected.follow(&outcome),
                Err(e) => warn!("Layout replacement rejected: {e}"),
            }
        }
        if let Some(message) = handled.message {
            notifications.send(message);
        }
    }
}

fn handle_export_requests(
    mut requests: EventReader<ExportRequest>,
    settings: Res<ExportSettings>,
    store: Res<LayoutStore>,
    session: Res<ProjectSession>,
    mut written: EventWriter<ExportWritten>,
    mut notifications: EventWriter<EditorNotification>,
) {
    for &ExportRequest(kind) in requests.read() {
        match write_export(kind, &settings.dir, store.layout(), &session) {
            Ok(path) => {
                notifications.send(EditorNotification::positive(format!(
                    "Exported {}",
                    path.display()
                )));
                written.send(ExportWritten { kind, path });
            }
            Err(e) => {
                let msg = format!("{} failed: {e}", kind.label());
                error!("{msg}");
                notifications.send(EditorNotification::warning(msg));
            }
        }
    }
}
