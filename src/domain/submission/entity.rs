use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted avatar size in bytes (500 KiB).
pub const MAX_AVATAR_BYTES: u64 = 500 * 1024;

/// MIME types accepted for the avatar image, compared case-insensitively.
///
/// `image/jpg` is not a registered type but browsers have historically
/// emitted it, so it stays on the allow-list.
pub const ACCEPTED_AVATAR_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Core domain entity: one visitor's validated ticket submission.
///
/// This is the only persisted record in the system. It is assembled once,
/// atomically, at submission time and written wholesale to the shared slot;
/// the ticket page reads it back on its next load. There is no update or
/// delete operation; a new submission overwrites the previous record.
///
/// # Invariants
/// - `full_name` is trimmed and at least 5 characters long
/// - `email` is trimmed and matches the `local@domain.tld` shape
/// - `github_username` is trimmed with no leading `@`
/// - `avatar` passed the type and size checks before it got here
///
/// Serialized in camelCase; this is the wire format shared between the
/// submission page and the ticket page and must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubmission {
    /// Visitor's display name as printed on the ticket
    pub full_name: String,

    /// Contact email, shown on the ticket detail block
    pub email: String,

    /// GitHub handle without the `@` prefix
    pub github_username: String,

    /// The validated avatar image and its metadata
    pub avatar: AvatarFile,
}

/// Metadata and inline contents of the accepted avatar image.
///
/// The image bytes travel inside the record as a base64 data URL so the
/// ticket page can render them without any further file access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarFile {
    /// Original file name as supplied by the client
    pub name: String,

    /// File size in bytes, at most [`MAX_AVATAR_BYTES`]
    pub size: u64,

    /// Lowercased MIME type, one of [`ACCEPTED_AVATAR_TYPES`]
    pub mime_type: String,

    /// Client-reported last-modified time, epoch milliseconds on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,

    /// `data:<mime>;base64,<payload>` encoding of the image bytes
    pub image_data: String,
}

/// Checks a candidate MIME type against the avatar allow-list.
pub fn is_accepted_avatar_type(mime_type: &str) -> bool {
    let lowered = mime_type.to_lowercase();
    ACCEPTED_AVATAR_TYPES.contains(&lowered.as_str())
}
