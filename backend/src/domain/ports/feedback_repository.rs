//! Port for feedback persistence and aggregate reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    CategoryCount, DailyCount, Feedback, FeedbackDraft, FeedbackFilter, FeedbackId, PageRequest,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by feedback repository adapters.
    pub enum FeedbackRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "feedback repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "feedback repository query failed: {message}",
    }
}

/// Port for storing, reading, and removing feedback records.
///
/// Each method is a single statement against the store; callers that combine
/// several calls get no atomicity across them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert a validated draft and return the stored record.
    async fn insert(&self, draft: &FeedbackDraft) -> Result<Feedback, FeedbackRepositoryError>;

    /// List records matching `filter`, newest first (ties broken by id,
    /// highest first). `None` for `page` returns every match.
    async fn list(
        &self,
        filter: &FeedbackFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<Feedback>, FeedbackRepositoryError>;

    /// Count every stored record.
    async fn count_all(&self) -> Result<u64, FeedbackRepositoryError>;

    /// Count records per category, omitting empty categories, in name order.
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, FeedbackRepositoryError>;

    /// Count records created at or after `since`, grouped by UTC day, newest
    /// day first.
    async fn count_daily_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyCount>, FeedbackRepositoryError>;

    /// Delete one record and return the number of rows removed.
    async fn delete_by_id(&self, id: FeedbackId) -> Result<u64, FeedbackRepositoryError>;

    /// Delete every record and return the number of rows removed.
    async fn delete_all(&self) -> Result<u64, FeedbackRepositoryError>;

    /// Restart identifier assignment so the next insert receives id 1.
    async fn reset_id_sequence(&self) -> Result<(), FeedbackRepositoryError>;
}
