use crate::domain::submission::entity::UserSubmission;
use async_trait::async_trait;

/// Name of the single slot shared between the submission and ticket pages.
pub const SLOT_KEY: &str = "userDetails";

/// Outcome of reading the slot.
///
/// Absent and malformed are ordinary outcomes here, not errors: the ticket
/// page consumes them explicitly and bounces the visitor back to the form
/// instead of failing on a missing or corrupt record.
#[derive(Debug)]
pub enum SlotRead {
    /// A well-formed submission is present.
    Present(UserSubmission),

    /// Nothing has been submitted yet (or the slot was cleared).
    Absent,

    /// The slot exists but does not deserialize as a submission.
    Malformed(String),
}

impl SlotRead {
    /// Returns the submission if present.
    pub fn into_present(self) -> Option<UserSubmission> {
        match self {
            SlotRead::Present(submission) => Some(submission),
            _ => None,
        }
    }
}

/// Single-key persistence shared by the two pages.
///
/// Write-then-navigate, read-once: the slot is written at most once per
/// submission and read at most once per ticket render, last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Overwrites the slot with a freshly serialized submission.
    async fn write(&self, submission: &UserSubmission) -> anyhow::Result<()>;

    /// Reads the slot, distinguishing present, absent, and malformed.
    async fn read(&self) -> anyhow::Result<SlotRead>;

    /// Empties the slot.
    async fn clear(&self) -> anyhow::Result<()>;
}
