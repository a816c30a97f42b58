//! # TestEditor: headless integration test harness
//!
//! Wraps `bevy::app::App` + `LayoutPlugin` so tests can drive the editor
//! through events exactly as the UI would, then inspect the resulting
//! resources.

use bevy::app::App;
use bevy::prelude::*;

use crate::model::{Layout, Room};
use crate::notifications::{EditorNotification, NotificationLog};
use crate::selection::{SelectRoom, SelectedRoom};
use crate::settings::EditorSettings;
use crate::store::{LayoutCommand, LayoutStore, RedoRequested, UndoRequested};
use crate::transform::GestureEvent;
use crate::LayoutPlugin;

pub struct TestEditor {
    app: App,
}

impl TestEditor {
    /// An editor with an empty layout, past its startup grace window.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(LayoutPlugin);
        // Run one update so Startup/PostStartup systems execute.
        app.update();
        Self { app }
    }

    /// An editor seeded with `layout` and empty history.
    pub fn with_layout(layout: Layout) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(LayoutStore::with_layout(layout));
        app.add_plugins(LayoutPlugin);
        app.update();
        Self { app }
    }

    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self::with_layout(Layout::new(rooms))
    }

    /// Enable grid snapping with the given step.
    pub fn with_snap(mut self, step: f64) -> Self {
        {
            let mut settings = self.app.world_mut().resource_mut::<EditorSettings>();
            settings.snap_enabled = true;
            settings.snap_size = step;
        }
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn command(&mut self, command: LayoutCommand) -> &mut Self {
        self.app.world_mut().send_event(command);
        self.app.update();
        self
    }

    pub fn gesture(&mut self, event: GestureEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self.app.update();
        self
    }

    pub fn select(&mut self, name: Option<&str>) -> &mut Self {
        self.app
            .world_mut()
            .send_event(SelectRoom(name.map(str::to_string)));
        self.app.update();
        self
    }

    pub fn undo(&mut self) -> &mut Self {
        self.app.world_mut().send_event(UndoRequested);
        self.app.update();
        self
    }

    pub fn redo(&mut self) -> &mut Self {
        self.app.world_mut().send_event(RedoRequested);
        self.app.update();
        self
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn store(&self) -> &LayoutStore {
        self.app.world().resource::<LayoutStore>()
    }

    pub fn layout(&self) -> &Layout {
        self.store().layout()
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.layout().room(name)
    }

    pub fn selected(&self) -> Option<&str> {
        self.app.world().resource::<SelectedRoom>().name()
    }

    pub fn notifications(&self) -> Vec<EditorNotification> {
        self.app
            .world()
            .resource::<NotificationLog>()
            .entries()
            .cloned()
            .collect()
    }

    pub fn last_notification(&self) -> Option<String> {
        self.app
            .world()
            .resource::<NotificationLog>()
            .latest()
            .map(|n| n.text.clone())
    }
}
