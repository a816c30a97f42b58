//! Rendering and writing of downloadable artifacts.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use layout::Layout;

use crate::atomic_write::atomic_write;
use crate::export_names::{json_file_name, svg_file_name};
use crate::json_export::export_json;
use crate::save_error::SaveError;
use crate::session::ProjectSession;
use crate::svg_export::floorplan_svg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// The layout verbatim.
    Json,
    /// The scaled floorplan.
    Svg,
    /// The current version comparison.
    DiffReport,
}

impl ExportKind {
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Json => "JSON export",
            ExportKind::Svg => "SVG export",
            ExportKind::DiffReport => "Diff report",
        }
    }
}

/// File name and contents of an artifact.
pub fn render_export(
    kind: ExportKind,
    layout: &Layout,
    session: &ProjectSession,
) -> Result<(String, String), SaveError> {
    match kind {
        ExportKind::Json => Ok((json_file_name(layout), export_json(layout)?)),
        ExportKind::Svg => Ok((svg_file_name(layout), floorplan_svg(layout))),
        ExportKind::DiffReport => {
            let report = session.diff_report()?;
            Ok((report.file_name, report.body))
        }
    }
}

/// Render an artifact and write it into `dir`. Returns the written path.
pub fn write_export(
    kind: ExportKind,
    dir: &Path,
    layout: &Layout,
    session: &ProjectSession,
) -> Result<PathBuf, SaveError> {
    let (file_name, body) = render_export(kind, layout, session)?;
    let path = dir.join(file_name);
    atomic_write(&path, body.as_bytes())?;
    info!("{} written to {}", kind.label(), path.display());
    Ok(path)
}
