//! Submission handoff: validated form values become the persisted record.
//!
//! Only reachable once validation reports zero violations. Assembles the
//! [`UserSubmission`] from the trimmed field values and the collector's
//! accepted avatar, writes it to the shared slot (last write wins, no
//! versioning), and hands back the fixed navigation target.

use super::dto::{Handoff, SubmitFormRequest};
use crate::application::collect_avatar::use_case::AvatarCollector;
use crate::domain::submission::entity::{AvatarFile, UserSubmission};
use crate::domain::submission::validation::{strip_github_at, validate_submission};
use crate::infrastructure::storage::traits::SlotStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Fixed relative location of the ticket page.
pub const TICKET_PAGE: &str = "/ticket";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more field rules were violated; all messages, in display order.
    #[error("submission rejected: {}", .0.join(", "))]
    Rejected(Vec<String>),

    /// The slot store could not persist the record.
    #[error("failed to persist submission")]
    Store(#[source] anyhow::Error),
}

pub struct SubmitFormUseCase {
    store: Arc<dyn SlotStore>,
}

impl SubmitFormUseCase {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Validates the four fields, persists the assembled record, and returns
    /// the navigation target.
    ///
    /// Rejection carries the complete violation list; the form stays
    /// editable and nothing is written. A store failure after successful
    /// validation is an infrastructure error, not a rejection.
    #[instrument(skip(self, request, collector), fields(github = %request.github_username))]
    pub async fn execute(
        &self,
        request: SubmitFormRequest,
        collector: &AvatarCollector,
    ) -> Result<Handoff, SubmitError> {
        let violations = validate_submission(
            &request.full_name,
            &request.email,
            &request.github_username,
            collector.has_selection(),
        );
        if !violations.is_empty() {
            return Err(SubmitError::Rejected(violations));
        }

        // Validation guarantees an active selection, and every entry path
        // awaits the encode before reaching the handoff.
        let selection = collector.selection().expect("validated selection");
        let submission = UserSubmission {
            full_name: request.full_name.trim().to_string(),
            email: request.email.trim().to_string(),
            github_username: strip_github_at(request.github_username.trim()).to_string(),
            avatar: AvatarFile {
                name: selection.name.clone(),
                size: selection.size,
                mime_type: selection.mime_type.clone(),
                last_modified: selection.last_modified,
                image_data: collector.data_url().unwrap_or_default().to_string(),
            },
        };

        self.store
            .write(&submission)
            .await
            .map_err(SubmitError::Store)?;

        info!(github = %submission.github_username, "submission persisted");
        Ok(Handoff {
            redirect_to: TICKET_PAGE,
        })
    }
}
