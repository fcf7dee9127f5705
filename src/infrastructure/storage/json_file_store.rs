//! File-backed implementation of the submission slot.
//!
//! The slot is one JSON document at `<data_dir>/userDetails.json`. Writes go
//! through a temp file in the same directory followed by a rename, so a
//! reader never observes a torn record even while a new submission is being
//! persisted.

use super::traits::{SLOT_KEY, SlotRead, SlotStore};
use crate::domain::submission::entity::UserSubmission;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct JsonFileSlotStore {
    slot_path: PathBuf,
}

impl JsonFileSlotStore {
    /// Creates the store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            slot_path: data_dir.join(format!("{SLOT_KEY}.json")),
        })
    }

    fn temp_path(&self) -> PathBuf {
        self.slot_path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SlotStore for JsonFileSlotStore {
    async fn write(&self, submission: &UserSubmission) -> anyhow::Result<()> {
        let payload = serde_json::to_vec(submission)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &payload).await?;
        tokio::fs::rename(&temp, &self.slot_path).await?;
        tracing::debug!(slot = SLOT_KEY, bytes = payload.len(), "slot written");
        Ok(())
    }

    async fn read(&self) -> anyhow::Result<SlotRead> {
        let raw = match tokio::fs::read(&self.slot_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SlotRead::Absent),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<UserSubmission>(&raw) {
            Ok(submission) => Ok(SlotRead::Present(submission)),
            Err(e) => {
                tracing::warn!(slot = SLOT_KEY, "slot contents malformed: {}", e);
                Ok(SlotRead::Malformed(e.to_string()))
            }
        }
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match tokio::fs::remove_file(&self.slot_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
