//! Project and version session.
//!
//! Tracks which backend project the editor is bound to, the version list,
//! an in-progress version preview and the two-version comparison. Session
//! operations never touch the layout store themselves: any operation that
//! changes the layout returns a `Replacement` the caller applies as a
//! wholesale `LayoutCommand::Replace`. A failed backend call returns the
//! error and leaves both the session and the layout as they were.

use bevy::prelude::*;

use layout::fingerprint::layout_fingerprint;
use layout::{compute_diff, Layout, LayoutCommand, LayoutDiff, MutationKind};

use crate::backend::{ProjectBackend, SaveProjectRequest, VersionInfo};
use crate::diff_report::DiffReport;
use crate::save_error::SaveError;

/// A layout to install wholesale, tagged with how history should treat it.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub layout: Layout,
    pub kind: MutationKind,
}

impl Replacement {
    pub fn into_command(self) -> LayoutCommand {
        LayoutCommand::Replace {
            layout: self.layout,
            kind: self.kind,
        }
    }
}

/// Result of `save_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// First save: the backend assigned this id.
    Created(String),
    /// The bound project was overwritten (the backend kept a version).
    Updated(String),
}

/// A stored version shown in place of the working layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub version: String,
    /// Working layout to put back when the preview is cancelled.
    stashed: Layout,
}

/// Two versions side by side and the diff from left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left_id: String,
    pub right_id: String,
    pub left: Layout,
    pub right: Layout,
    pub diff: LayoutDiff,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct ProjectSession {
    project_id: Option<String>,
    project_name: Option<String>,
    saved_fingerprint: Option<u32>,
    versions: Vec<VersionInfo>,
    preview: Option<Preview>,
    comparison: Option<Comparison>,
}

impl ProjectSession {
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn versions(&self) -> &[VersionInfo] {
        &self.versions
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Whether `layout` differs from what was last saved or loaded.
    ///
    /// A layout never saved counts as dirty once it has rooms.
    pub fn is_dirty(&self, layout: &Layout) -> bool {
        match self.saved_fingerprint {
            Some(saved) => saved != layout_fingerprint(layout),
            None => !layout.rooms.is_empty(),
        }
    }

    fn require_project(&self) -> Result<&str, SaveError> {
        self.project_id.as_deref().ok_or(SaveError::NoProject)
    }

    fn reset_views(&mut self) {
        self.versions.clear();
        self.preview = None;
        self.comparison = None;
    }

    /// Bind to a project id handed over from outside (e.g. the dashboard),
    /// treating `layout` as its saved state.
    pub fn adopt(&mut self, project_id: impl Into<String>, layout: &Layout) {
        self.reset_views();
        self.project_id = Some(project_id.into());
        self.saved_fingerprint = Some(layout_fingerprint(layout));
    }

    /// Load a project from the backend.
    pub fn open_project(
        &mut self,
        backend: &dyn ProjectBackend,
        id: &str,
    ) -> Result<Replacement, SaveError> {
        let record = backend.get_project(id)?;
        let layout = record.layout.sanitized();
        self.reset_views();
        self.project_id = Some(id.to_string());
        self.project_name = Some(record.name);
        self.saved_fingerprint = Some(layout_fingerprint(&layout));
        info!("Opened project {id} ({} rooms)", layout.rooms.len());
        Ok(Replacement {
            layout,
            kind: MutationKind::Load,
        })
    }

    /// Create the project on first save, update it afterwards.
    pub fn save_project(
        &mut self,
        backend: &dyn ProjectBackend,
        name: &str,
        layout: &Layout,
        thumbnail: Option<String>,
    ) -> Result<SaveOutcome, SaveError> {
        let request = SaveProjectRequest {
            name: name.to_string(),
            layout: layout.clone(),
            thumbnail,
        };
        let outcome = match self.project_id.as_deref() {
            Some(id) => {
                backend.update_project(id, &request)?;
                SaveOutcome::Updated(id.to_string())
            }
            None => SaveOutcome::Created(backend.create_project(&request)?),
        };
        if let SaveOutcome::Created(id) = &outcome {
            self.project_id = Some(id.clone());
        }
        self.project_name = Some(request.name);
        self.saved_fingerprint = Some(layout_fingerprint(layout));
        Ok(outcome)
    }

    /// Fetch the version list. Any open comparison is closed.
    pub fn refresh_versions(
        &mut self,
        backend: &dyn ProjectBackend,
    ) -> Result<&[VersionInfo], SaveError> {
        let id = self.require_project()?;
        let versions = backend.list_versions(id)?;
        self.versions = versions;
        self.comparison = None;
        Ok(&self.versions)
    }

    /// Show a stored version without recording history. `current` is kept
    /// so `cancel_preview` can put it back.
    pub fn preview_version(
        &mut self,
        backend: &dyn ProjectBackend,
        version: &str,
        current: &Layout,
    ) -> Result<Replacement, SaveError> {
        let id = self.require_project()?;
        let record = backend.get_version(id, version)?;
        let stashed = match self.preview.take() {
            Some(previous) => previous.stashed,
            None => current.clone(),
        };
        self.preview = Some(Preview {
            version: version.to_string(),
            stashed,
        });
        Ok(Replacement {
            layout: record.layout.sanitized(),
            kind: MutationKind::Preview,
        })
    }

    /// Put the working layout back after a preview.
    pub fn cancel_preview(&mut self) -> Option<Replacement> {
        self.preview.take().map(|preview| Replacement {
            layout: preview.stashed,
            kind: MutationKind::Preview,
        })
    }

    /// Revert the project to `version` on the backend, then reload it.
    pub fn revert_to_version(
        &mut self,
        backend: &dyn ProjectBackend,
        version: &str,
    ) -> Result<Replacement, SaveError> {
        let id = self.require_project()?.to_string();
        backend.revert_to_version(&id, version)?;
        let record = backend.get_project(&id)?;
        let layout = record.layout.sanitized();
        self.preview = None;
        self.saved_fingerprint = Some(layout_fingerprint(&layout));
        match backend.list_versions(&id) {
            Ok(versions) => self.versions = versions,
            Err(e) => warn!("Version list refresh after revert failed: {e}"),
        }
        Ok(Replacement {
            layout,
            kind: MutationKind::Revert,
        })
    }

    /// Fetch two versions and diff left against right.
    pub fn compare_versions(
        &mut self,
        backend: &dyn ProjectBackend,
        left_id: &str,
        right_id: &str,
    ) -> Result<&Comparison, SaveError> {
        let id = self.require_project()?;
        if left_id.is_empty() || right_id.is_empty() {
            return Err(SaveError::InvalidCompare(
                "choose two versions to compare".into(),
            ));
        }
        if left_id == right_id {
            return Err(SaveError::InvalidCompare(
                "pick two different versions".into(),
            ));
        }
        let left = backend.get_version(id, left_id)?.layout.sanitized();
        let right = backend.get_version(id, right_id)?.layout.sanitized();
        let diff = compute_diff(&left, &right);
        debug!("Compared versions {left_id} and {right_id}: {}", diff.summary());
        Ok(self.comparison.insert(Comparison {
            left_id: left_id.to_string(),
            right_id: right_id.to_string(),
            left,
            right,
            diff,
        }))
    }

    /// Swap the compared sides; the diff is mirrored.
    pub fn swap_compare(&mut self) -> Option<&Comparison> {
        let current = self.comparison.take()?;
        Some(self.comparison.insert(Comparison {
            left_id: current.right_id,
            right_id: current.left_id,
            left: current.right,
            right: current.left,
            diff: current.diff.inverted(),
        }))
    }

    pub fn close_compare(&mut self) {
        self.comparison = None;
    }

    /// The current comparison as a downloadable report.
    pub fn diff_report(&self) -> Result<DiffReport, SaveError> {
        let id = self.require_project()?;
        let comparison = self
            .comparison
            .as_ref()
            .ok_or_else(|| SaveError::InvalidCompare("no diff computed".into()))?;
        DiffReport::new(
            id,
            &comparison.left_id,
            &comparison.right_id,
            &comparison.diff,
        )
    }

    /// Install a freshly generated layout. The session forgets its project:
    /// the next save creates a new one.
    pub fn load_generated(&mut self, layout: Layout) -> Replacement {
        self.reset_views();
        self.project_id = None;
        self.project_name = None;
        self.saved_fingerprint = None;
        Replacement {
            layout: layout.sanitized(),
            kind: MutationKind::Load,
        }
    }
}
