//! Project backend contract.
//!
//! One method per endpoint of the project service. Implementations own
//! transport and persistence; the editor only sees whole layouts coming back,
//! which it applies through a wholesale `Replace`.
//!
//! | method               | endpoint                                        |
//! |----------------------|-------------------------------------------------|
//! | `list_projects`      | `GET /projects`                                 |
//! | `get_project`        | `GET /projects/{id}`                            |
//! | `create_project`     | `POST /save-project`                            |
//! | `update_project`     | `PUT /projects/{id}` (snapshots a version first) |
//! | `list_versions`      | `GET /projects/{id}/versions`                   |
//! | `get_version`        | `GET /projects/{id}/versions/{vid}`             |
//! | `revert_to_version`  | `POST /projects/{id}/versions/{vid}/revert`     |

use serde::{Deserialize, Serialize};

use layout::Layout;

use crate::save_error::SaveError;

/// Entry of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A stored project, or a project as it was at some version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layout: Layout,
    /// Data URL of a preview image, when one was captured at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Body of a create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveProjectRequest {
    pub name: String,
    pub layout: Layout,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Metadata of one stored version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created: String,
    /// Whether the version carries a thumbnail.
    #[serde(default)]
    pub thumbnail: bool,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// `GET /projects` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

/// `GET /projects/{id}/versions` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionList {
    #[serde(default)]
    pub versions: Vec<VersionInfo>,
}

/// `GET /projects/{id}/versions/{vid}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEnvelope {
    pub project: ProjectRecord,
}

/// The project service as seen by the editor.
pub trait ProjectBackend: Send + Sync {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>, SaveError>;

    fn get_project(&self, id: &str) -> Result<ProjectRecord, SaveError>;

    /// Store a new project and return its id.
    fn create_project(&self, request: &SaveProjectRequest) -> Result<String, SaveError>;

    /// Overwrite a project. The previous state is kept as a version.
    fn update_project(&self, id: &str, request: &SaveProjectRequest) -> Result<(), SaveError>;

    fn list_versions(&self, id: &str) -> Result<Vec<VersionInfo>, SaveError>;

    fn get_version(&self, id: &str, version: &str) -> Result<ProjectRecord, SaveError>;

    /// Replace the project's current state with a stored version.
    fn revert_to_version(&self, id: &str, version: &str) -> Result<(), SaveError>;
}
