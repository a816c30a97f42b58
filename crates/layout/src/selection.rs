//! Currently selected room.

use bevy::prelude::*;

use crate::store::CommandOutcome;

/// Name of the room selected in the list or the 3D view.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct SelectedRoom(pub Option<String>);

/// Request to change the selection. `None` clears it.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SelectRoom(pub Option<String>);

impl SelectedRoom {
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is(&self, name: &str) -> bool {
        self.0.as_deref() == Some(name)
    }

    /// Keep the selection pointing at the same room after a command.
    pub fn follow(&mut self, outcome: &CommandOutcome) {
        match outcome {
            CommandOutcome::Renamed { from, to } if self.is(from) => {
                self.0 = Some(to.clone());
            }
            CommandOutcome::Deleted(name) if self.is(name) => self.0 = None,
            CommandOutcome::Replaced(_) => self.0 = None,
            _ => {}
        }
    }
}

/// System applying `SelectRoom` requests.
pub fn apply_selection(mut events: EventReader<SelectRoom>, mut selected: ResMut<SelectedRoom>) {
    for SelectRoom(name) in events.read() {
        selected.0 = name.clone();
    }
}
