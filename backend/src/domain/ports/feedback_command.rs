//! Driving port for feedback mutations.

use async_trait::async_trait;

use crate::domain::{Error, Feedback, FeedbackId};

/// Raw submission as received from a client.
///
/// Fields stay untyped so the domain can apply its validation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFeedbackRequest {
    /// Requested category name.
    pub category: Option<String>,
    /// Untrimmed feedback text.
    pub content: Option<String>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFeedbackResponse {
    /// Identifier assigned by the store.
    pub id: FeedbackId,
}

/// Outcome of removing every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeFeedbackResponse {
    /// Records that existed before the purge, newest first.
    pub backup: Vec<Feedback>,
}

impl PurgeFeedbackResponse {
    /// Number of records captured before deletion.
    #[must_use]
    pub fn backup_count(&self) -> usize {
        self.backup.len()
    }
}

/// Driving port for feedback write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Validate and store a submission.
    ///
    /// Validation failures surface as `invalid_request` errors and nothing is
    /// written.
    async fn submit(
        &self,
        request: SubmitFeedbackRequest,
    ) -> Result<SubmitFeedbackResponse, Error>;

    /// Remove one record. Succeeds whether or not the record existed.
    async fn delete(&self, id: FeedbackId) -> Result<(), Error>;

    /// Snapshot, delete every record, then restart identifier assignment.
    async fn purge(&self) -> Result<PurgeFeedbackResponse, Error>;
}
