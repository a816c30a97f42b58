//! Downloadable report of a version comparison.

use serde::{Deserialize, Serialize};

use layout::LayoutDiff;

use crate::export_names::diff_report_file_name;
use crate::save_error::SaveError;

/// A rendered diff together with the file name it is offered under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub file_name: String,
    pub body: String,
}

impl DiffReport {
    /// Pretty JSON of `diff` in the `{added, removed, modified}` shape.
    pub fn new(project: &str, left: &str, right: &str, diff: &LayoutDiff) -> Result<Self, SaveError> {
        let body =
            serde_json::to_string_pretty(diff).map_err(|e| SaveError::Encode(e.to_string()))?;
        Ok(Self {
            file_name: diff_report_file_name(project, left, right),
            body,
        })
    }
}
