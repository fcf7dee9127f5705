use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A file offered for selection, before any validation has run.
///
/// Both acceptance surfaces (drag-and-drop and the file picker) reduce the
/// incoming file to this shape.
#[derive(Debug, Clone)]
pub struct AvatarCandidate {
    pub file_name: String,
    pub mime_type: String,
    /// Client-reported modification time; stamped server-side when missing.
    pub last_modified: Option<DateTime<Utc>>,
    pub bytes: Bytes,
}
