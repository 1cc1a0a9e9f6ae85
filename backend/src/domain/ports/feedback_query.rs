//! Driving port for feedback reads.

use async_trait::async_trait;

use crate::domain::{
    Error, ExportDocument, ExportFormat, Feedback, FeedbackFilter, FeedbackStats, PageRequest,
};

/// Request for one page of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFeedbacksRequest {
    /// Category filter.
    pub filter: FeedbackFilter,
    /// Limit/offset window.
    pub page: PageRequest,
}

/// One page of records, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFeedbacksResponse {
    /// Records in the page.
    pub feedbacks: Vec<Feedback>,
}

/// Request for a downloadable export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFeedbacksRequest {
    /// Category filter.
    pub filter: FeedbackFilter,
    /// Output format.
    pub format: ExportFormat,
}

/// Driving port for feedback read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    /// List records matching the request.
    async fn list(&self, request: ListFeedbacksRequest) -> Result<ListFeedbacksResponse, Error>;

    /// Compute totals, per-category counts, and the daily histogram.
    async fn stats(&self) -> Result<FeedbackStats, Error>;

    /// Render every matching record for download.
    async fn export(&self, request: ExportFeedbacksRequest) -> Result<ExportDocument, Error>;
}
