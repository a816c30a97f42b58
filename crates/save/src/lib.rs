//! Layout export and project persistence for the room editor.
//!
//! Exports (JSON, SVG floorplan, diff report) are pure renderers plus an
//! atomic file write. Project persistence goes through the `ProjectBackend`
//! trait; `ProjectSession` holds the project/version state and hands back
//! wholesale replacements for the layout store.

pub mod atomic_write;
pub mod backend;
pub mod diff_report;
pub mod export;
pub mod export_names;
pub mod json_export;
pub mod memory_backend;
mod save_plugin;
pub mod save_error;
pub mod session;
pub mod svg_export;


pub use backend::{ProjectBackend, ProjectRecord, ProjectSummary, SaveProjectRequest, VersionInfo};
pub use export::ExportKind;
pub use memory_backend::InMemoryBackend;
pub use save_error::SaveError;
pub use save_plugin::{
    BackendHandle, ExportRequest, ExportSettings, ExportWritten, PendingLayoutRestore,
    ProjectRequest, SavePlugin,
};
pub use session::{Comparison, ProjectSession, Replacement, SaveOutcome};
