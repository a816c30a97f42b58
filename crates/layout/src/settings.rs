//! Runtime editor settings.

use bevy::prelude::*;

use crate::config::DEFAULT_SNAP_STEP;

/// Toggles exposed in the editor's transform panel.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub snap_enabled: bool,
    /// Grid step used while snapping is on.
    pub snap_size: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_enabled: false,
            snap_size: DEFAULT_SNAP_STEP,
        }
    }
}

impl EditorSettings {
    /// Step passed to `snap`: the grid size when enabled, otherwise `0`.
    pub fn snap_step(&self) -> f64 {
        if self.snap_enabled {
            self.snap_size
        } else {
            0.0
        }
    }
}
