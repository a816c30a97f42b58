//! In-process `ProjectBackend` with the service's versioning semantics.
//!
//! Updates and reverts snapshot the current state as a new version before
//! overwriting it. Version ids are sequential per project. A failure can be
//! queued with `fail_next` to exercise error paths.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;

use crate::backend::{
    ProjectBackend, ProjectRecord, ProjectSummary, SaveProjectRequest, VersionInfo,
};
use crate::save_error::SaveError;

#[derive(Debug, Clone)]
struct StoredVersion {
    info: VersionInfo,
    record: ProjectRecord,
}

#[derive(Debug, Clone)]
struct StoredProject {
    current: ProjectRecord,
    versions: Vec<StoredVersion>,
}

impl StoredProject {
    fn snapshot(&mut self) {
        let version = (self.versions.len() + 1).to_string();
        self.versions.push(StoredVersion {
            info: VersionInfo {
                version,
                name: self.current.name.clone(),
                created: timestamp(),
                thumbnail: self.current.thumbnail.is_some(),
            },
            record: self.current.clone(),
        });
    }

    fn version(&self, version: &str) -> Result<&StoredVersion, SaveError> {
        self.versions
            .iter()
            .find(|v| v.info.version == version)
            .ok_or_else(|| SaveError::NotFound(format!("version {version}")))
    }
}

#[derive(Debug, Default)]
struct BackendState {
    projects: BTreeMap<String, StoredProject>,
    next_id: u64,
    pending_failure: Option<(u16, String)>,
}

impl BackendState {
    fn take_failure(&mut self) -> Result<(), SaveError> {
        match self.pending_failure.take() {
            Some((status, detail)) => Err(SaveError::Backend { status, detail }),
            None => Ok(()),
        }
    }

    fn project(&self, id: &str) -> Result<&StoredProject, SaveError> {
        self.projects
            .get(id)
            .ok_or_else(|| SaveError::NotFound(format!("project {id}")))
    }

    fn project_mut(&mut self, id: &str) -> Result<&mut StoredProject, SaveError> {
        self.projects
            .get_mut(id)
            .ok_or_else(|| SaveError::NotFound(format!("project {id}")))
    }
}

fn timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next backend call fail with `status`.
    pub fn fail_next(&self, status: u16, detail: impl Into<String>) {
        self.lock().pending_failure = Some((status, detail.into()));
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProjectBackend for InMemoryBackend {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>, SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        Ok(state
            .projects
            .values()
            .map(|p| ProjectSummary {
                id: p.current.id.clone(),
                name: p.current.name.clone(),
            })
            .collect())
    }

    fn get_project(&self, id: &str) -> Result<ProjectRecord, SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        Ok(state.project(id)?.current.clone())
    }

    fn create_project(&self, request: &SaveProjectRequest) -> Result<String, SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        state.next_id += 1;
        let id = format!("p{}", state.next_id);
        let current = ProjectRecord {
            id: id.clone(),
            name: request.name.clone(),
            layout: request.layout.clone(),
            thumbnail: request.thumbnail.clone(),
        };
        state.projects.insert(
            id.clone(),
            StoredProject {
                current,
                versions: Vec::new(),
            },
        );
        debug!("Created project {id}");
        Ok(id)
    }

    fn update_project(&self, id: &str, request: &SaveProjectRequest) -> Result<(), SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        let project = state.project_mut(id)?;
        project.snapshot();
        project.current.name = request.name.clone();
        project.current.layout = request.layout.clone();
        if request.thumbnail.is_some() {
            project.current.thumbnail = request.thumbnail.clone();
        }
        debug!("Updated project {id} ({} versions)", project.versions.len());
        Ok(())
    }

    fn list_versions(&self, id: &str) -> Result<Vec<VersionInfo>, SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        Ok(state
            .project(id)?
            .versions
            .iter()
            .map(|v| v.info.clone())
            .collect())
    }

    fn get_version(&self, id: &str, version: &str) -> Result<ProjectRecord, SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        Ok(state.project(id)?.version(version)?.record.clone())
    }

    fn revert_to_version(&self, id: &str, version: &str) -> Result<(), SaveError> {
        let mut state = self.lock();
        state.take_failure()?;
        let project = state.project_mut(id)?;
        let restored = project.version(version)?.record.clone();
        project.snapshot();
        project.current = ProjectRecord {
            id: id.to_string(),
            ..restored
        };
        debug!("Reverted project {id} to version {version}");
        Ok(())
    }
}
