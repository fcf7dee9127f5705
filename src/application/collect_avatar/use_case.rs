//! Avatar collection: the single "selected file" slot behind the form.
//!
//! Candidates arrive through two entry points, drag-and-drop and the file
//! picker. Both funnel into one validation routine, so the two paths cannot
//! drift apart. A candidate that fails the type or size check never becomes
//! the active selection, and it also clears whatever was selected before:
//! the last attempt wins, valid or not.
//!
//! Accepting a candidate produces an [`EncodeJob`] tagged with a token from a
//! monotonically increasing sequence. Encoding runs asynchronously; applying
//! its result requires the token to still be current, so when selections are
//! swapped rapidly only the latest encode lands and superseded ones are
//! dropped on the floor.

use super::dto::AvatarCandidate;
use crate::domain::submission::entity::{
    MAX_AVATAR_BYTES, is_accepted_avatar_type,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// Rejection of a candidate file. The messages are the user-facing notice
/// texts, surfaced verbatim by the presentation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectError {
    #[error("Please select a JPG or PNG image file.")]
    UnsupportedType,
    #[error("File size must be less than 500KB.")]
    TooLarge,
}

/// The currently accepted avatar and, once encoding completes, its data URL.
#[derive(Debug, Clone)]
pub struct SelectedAvatar {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub last_modified: DateTime<Utc>,
    data_url: Option<String>,
}

impl SelectedAvatar {
    /// The cached data URL, if encoding has completed and been applied.
    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }
}

/// A pending encoding of the accepted file's bytes into a data URL.
#[derive(Debug)]
pub struct EncodeJob {
    token: u64,
    mime_type: String,
    bytes: Bytes,
}

/// A finished encoding, still carrying the token it was issued under.
#[derive(Debug)]
pub struct EncodedAvatar {
    token: u64,
    pub data_url: String,
}

/// Maintains the optional "selected file" reference for one form interaction.
#[derive(Debug, Default)]
pub struct AvatarCollector {
    selection: Option<SelectedAvatar>,
    encode_seq: u64,
}

impl AvatarCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry point for files dropped onto the form.
    pub fn select_from_drop(&mut self, candidate: AvatarCandidate) -> Result<EncodeJob, CollectError> {
        self.process(candidate)
    }

    /// Entry point for files chosen through the picker.
    pub fn select_from_picker(
        &mut self,
        candidate: AvatarCandidate,
    ) -> Result<EncodeJob, CollectError> {
        self.process(candidate)
    }

    /// Validates a candidate and, on success, makes it the active selection.
    ///
    /// Validation order: MIME type first, then size. Any failure clears the
    /// prior selection before returning.
    fn process(&mut self, candidate: AvatarCandidate) -> Result<EncodeJob, CollectError> {
        if !is_accepted_avatar_type(&candidate.mime_type) {
            debug!(mime = %candidate.mime_type, "avatar rejected: unsupported type");
            self.selection = None;
            return Err(CollectError::UnsupportedType);
        }

        let size = candidate.bytes.len() as u64;
        if size > MAX_AVATAR_BYTES {
            debug!(size, "avatar rejected: over size limit");
            self.selection = None;
            return Err(CollectError::TooLarge);
        }

        let mime_type = candidate.mime_type.to_lowercase();
        self.selection = Some(SelectedAvatar {
            name: candidate.file_name,
            size,
            mime_type: mime_type.clone(),
            last_modified: candidate.last_modified.unwrap_or_else(Utc::now),
            data_url: None,
        });

        self.encode_seq += 1;
        Ok(EncodeJob {
            token: self.encode_seq,
            mime_type,
            bytes: candidate.bytes,
        })
    }

    /// Stores a finished encoding, unless a newer selection superseded it.
    ///
    /// Returns whether the result was applied.
    pub fn apply_encoded(&mut self, encoded: EncodedAvatar) -> bool {
        if encoded.token != self.encode_seq {
            debug!(
                token = encoded.token,
                current = self.encode_seq,
                "stale avatar encode dropped"
            );
            return false;
        }
        match self.selection.as_mut() {
            Some(selection) => {
                selection.data_url = Some(encoded.data_url);
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> Option<&SelectedAvatar> {
        self.selection.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// The cached data URL of the active selection, the one collector value
    /// read by the submission handoff.
    pub fn data_url(&self) -> Option<&str> {
        self.selection.as_ref().and_then(|s| s.data_url())
    }
}

/// Encodes the accepted file's bytes into a `data:<mime>;base64,` URL.
pub async fn encode(job: EncodeJob) -> anyhow::Result<EncodedAvatar> {
    let EncodeJob {
        token,
        mime_type,
        bytes,
    } = job;
    let data_url = tokio::task::spawn_blocking(move || {
        format!("data:{};base64,{}", mime_type, BASE64.encode(&bytes))
    })
    .await?;
    Ok(EncodedAvatar { token, data_url })
}
