//! Ticket rendering: the persisted submission becomes the displayed ticket.
//!
//! Runs once per page load. The slot read has three explicit outcomes;
//! absent and malformed are reported to the caller as [`RenderOutcome::Missing`]
//! so the page can bounce the visitor back to the form instead of failing on
//! a field access.

use super::dto::TicketView;
use crate::infrastructure::storage::traits::{SlotRead, SlotStore};
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{instrument, warn};

/// Exclusive upper bound of the random display identifier.
pub const DISPLAY_ID_BOUND: u32 = 100_000;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The slot store itself failed (I/O, permissions), distinct from the
    /// slot merely being empty.
    #[error("failed to read persisted submission")]
    Store(#[source] anyhow::Error),
}

/// Why there is no ticket to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReason {
    NeverSubmitted,
    Malformed,
}

#[derive(Debug)]
pub enum RenderOutcome {
    Ticket(TicketView),
    Missing(MissingReason),
}

pub struct RenderTicketUseCase {
    store: Arc<dyn SlotStore>,
}

impl RenderTicketUseCase {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<RenderOutcome, RenderError> {
        let submission = match self.store.read().await.map_err(RenderError::Store)? {
            SlotRead::Present(submission) => submission,
            SlotRead::Absent => return Ok(RenderOutcome::Missing(MissingReason::NeverSubmitted)),
            SlotRead::Malformed(reason) => {
                warn!(%reason, "persisted submission malformed, bouncing to form");
                return Ok(RenderOutcome::Missing(MissingReason::Malformed));
            }
        };

        let display_id = rand::thread_rng().gen_range(0..DISPLAY_ID_BOUND);
        Ok(RenderOutcome::Ticket(TicketView {
            display_id,
            full_name: submission.full_name,
            email: submission.email,
            github_username: submission.github_username,
            avatar_data_url: submission.avatar.image_data,
        }))
    }
}
