//! User-facing editor messages.
//!
//! Systems emit `EditorNotification`s for recoverable conditions (nothing to
//! undo, a failed save, an export written to disk). They are collected into
//! a bounded `NotificationLog` the host UI drains for display.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::NOTIFICATION_LOG_CAPACITY;

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPriority {
    /// An operation failed; the layout is unchanged.
    Warning,
    /// General information.
    Info,
    /// An operation completed.
    Positive,
}

impl NotificationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Warning => "WARNING",
            NotificationPriority::Info => "INFO",
            NotificationPriority::Positive => "OK",
        }
    }
}

/// Event emitted by systems to surface a message to the user.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EditorNotification {
    pub text: String,
    pub priority: NotificationPriority,
}

impl EditorNotification {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Warning,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Info,
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Positive,
        }
    }
}

/// Most recent notifications, oldest first.
#[derive(Resource, Debug, Default)]
pub struct NotificationLog {
    entries: VecDeque<EditorNotification>,
}

impl NotificationLog {
    pub fn push(&mut self, notification: EditorNotification) {
        self.entries.push_back(notification);
        while self.entries.len() > NOTIFICATION_LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &EditorNotification> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EditorNotification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return every entry.
    pub fn drain(&mut self) -> Vec<EditorNotification> {
        self.entries.drain(..).collect()
    }
}

/// System that moves notification events into the log.
pub fn collect_notifications(
    mut events: EventReader<EditorNotification>,
    mut log: ResMut<NotificationLog>,
) {
    for event in events.read() {
        match event.priority {
            NotificationPriority::Warning => warn!("{}", event.text),
            _ => info!("{}", event.text),
        }
        log.push(event.clone());
    }
}
