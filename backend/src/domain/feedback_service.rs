//! Feedback domain services.
//!
//! These services implement the feedback driving ports on top of a
//! [`FeedbackRepository`]. Store failures are logged here and surfaced to
//! callers as internal errors carrying a per-operation message.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    ExportFeedbacksRequest, FeedbackCommand, FeedbackQuery, FeedbackRepository,
    FeedbackRepositoryError, ListFeedbacksRequest, ListFeedbacksResponse, PurgeFeedbackResponse,
    SubmitFeedbackRequest, SubmitFeedbackResponse,
};
use crate::domain::{
    Error, ExportDocument, FeedbackDraft, FeedbackFilter, FeedbackId, FeedbackStats,
    FeedbackValidationError, daily_window_start, export,
};

const SUBMIT_FAILED: &str = "Erro ao processar feedback";
const LIST_FAILED: &str = "Erro ao buscar feedbacks";
const STATS_FAILED: &str = "Erro ao buscar estatísticas";
const EXPORT_FAILED: &str = "Erro ao exportar dados";
const DELETE_FAILED: &str = "Erro ao deletar feedback";
const PURGE_FAILED: &str = "Erro ao zerar feedbacks";

/// Page sizes above this are served but logged.
pub const LARGE_PAGE_LIMIT: u64 = 1_000;

fn map_repository_error(error: FeedbackRepositoryError, message: &'static str) -> Error {
    match &error {
        FeedbackRepositoryError::Connection { .. } => {
            error!(%error, operation = message, "feedback store unavailable");
        }
        FeedbackRepositoryError::Query { .. } => {
            error!(%error, operation = message, "feedback store query failed");
        }
    }
    Error::internal(message)
}

fn map_validation_error(error: &FeedbackValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field().as_str(),
        "code": error.code(),
    }))
}

/// Feedback service implementing the command driving port.
#[derive(Clone)]
pub struct FeedbackCommandService<R> {
    feedback_repo: Arc<R>,
}

impl<R> FeedbackCommandService<R> {
    /// Create a new command service with the feedback repository.
    pub const fn new(feedback_repo: Arc<R>) -> Self {
        Self { feedback_repo }
    }
}

#[async_trait]
impl<R> FeedbackCommand for FeedbackCommandService<R>
where
    R: FeedbackRepository,
{
    async fn submit(
        &self,
        request: SubmitFeedbackRequest,
    ) -> Result<SubmitFeedbackResponse, Error> {
        let draft = FeedbackDraft::parse(request.category.as_deref(), request.content.as_deref())
            .map_err(|err| {
                debug!(code = err.code(), "feedback submission rejected");
                map_validation_error(&err)
            })?;

        let stored = self
            .feedback_repo
            .insert(&draft)
            .await
            .map_err(|err| map_repository_error(err, SUBMIT_FAILED))?;

        info!(id = %stored.id(), category = %stored.category(), "feedback stored");
        Ok(SubmitFeedbackResponse { id: stored.id() })
    }

    async fn delete(&self, id: FeedbackId) -> Result<(), Error> {
        let removed = self
            .feedback_repo
            .delete_by_id(id)
            .await
            .map_err(|err| map_repository_error(err, DELETE_FAILED))?;
        info!(%id, removed, "feedback delete handled");
        Ok(())
    }

    async fn purge(&self) -> Result<PurgeFeedbackResponse, Error> {
        let backup = self
            .feedback_repo
            .list(&FeedbackFilter::all(), None)
            .await
            .map_err(|err| map_repository_error(err, PURGE_FAILED))?;
        let removed = self
            .feedback_repo
            .delete_all()
            .await
            .map_err(|err| map_repository_error(err, PURGE_FAILED))?;
        self.feedback_repo
            .reset_id_sequence()
            .await
            .map_err(|err| map_repository_error(err, PURGE_FAILED))?;

        warn!(
            backup_count = backup.len(),
            removed, "all feedback purged and id sequence reset"
        );
        Ok(PurgeFeedbackResponse { backup })
    }
}

/// Feedback service implementing the query driving port.
#[derive(Clone)]
pub struct FeedbackQueryService<R> {
    feedback_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> FeedbackQueryService<R> {
    /// Create a new query service.
    ///
    /// `clock` supplies the stats window end and the export file stamp.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use feedback_backend::domain::FeedbackQueryService;
    /// use feedback_backend::outbound::memory::InMemoryFeedbackRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = FeedbackQueryService::new(
    ///     Arc::new(InMemoryFeedbackRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(feedback_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            feedback_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> FeedbackQuery for FeedbackQueryService<R>
where
    R: FeedbackRepository,
{
    async fn list(&self, request: ListFeedbacksRequest) -> Result<ListFeedbacksResponse, Error> {
        let ListFeedbacksRequest { filter, page } = request;
        if page.limit > LARGE_PAGE_LIMIT {
            warn!(
                limit = page.limit,
                offset = page.offset,
                "serving unusually large feedback page"
            );
        }

        let feedbacks = self
            .feedback_repo
            .list(&filter, Some(page))
            .await
            .map_err(|err| map_repository_error(err, LIST_FAILED))?;
        Ok(ListFeedbacksResponse { feedbacks })
    }

    async fn stats(&self) -> Result<FeedbackStats, Error> {
        let by_category = self
            .feedback_repo
            .count_by_category()
            .await
            .map_err(|err| map_repository_error(err, STATS_FAILED))?;
        let total = self
            .feedback_repo
            .count_all()
            .await
            .map_err(|err| map_repository_error(err, STATS_FAILED))?;
        let since = daily_window_start(self.clock.utc());
        let daily = self
            .feedback_repo
            .count_daily_since(since)
            .await
            .map_err(|err| map_repository_error(err, STATS_FAILED))?;

        Ok(FeedbackStats {
            total,
            by_category,
            daily,
        })
    }

    async fn export(&self, request: ExportFeedbacksRequest) -> Result<ExportDocument, Error> {
        let ExportFeedbacksRequest { filter, format } = request;
        let records = self
            .feedback_repo
            .list(&filter, None)
            .await
            .map_err(|err| map_repository_error(err, EXPORT_FAILED))?;
        let body = export::render(format, &records).map_err(|err| {
            error!(error = %err, "feedback export rendering failed");
            Error::internal(EXPORT_FAILED)
        })?;

        Ok(ExportDocument {
            format,
            file_name: export::export_file_name(format, self.clock.utc()),
            body,
        })
    }
}

#[cfg(test)]
#[path = "feedback_service_tests.rs"]
mod tests;
