// ---------------------------------------------------------------------------
// SaveError: error type for export, import and project backend operations
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while exporting, importing or syncing a layout.
///
/// Every variant is recoverable: callers turn it into an
/// `EditorNotification` and leave the layout store untouched.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (file not found, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// JSON encoding failed.
    Encode(String),
    /// JSON decoding failed (malformed layout or response).
    Decode(String),
    /// The project backend rejected the request.
    Backend { status: u16, detail: String },
    /// A project or version id the backend does not know.
    NotFound(String),
    /// The operation needs an open project and none is open.
    NoProject,
    /// A version comparison was requested with unusable ids.
    InvalidCompare(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Backend { status, detail } => {
                write!(f, "Backend error ({status}): {detail}")
            }
            SaveError::NotFound(what) => write!(f, "Not found: {what}"),
            SaveError::NoProject => write!(f, "No project is open"),
            SaveError::InvalidCompare(reason) => write!(f, "Cannot compare versions: {reason}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            SaveError::Io(e.into())
        } else {
            SaveError::Decode(e.to_string())
        }
    }
}
