//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedbackCommand, FeedbackQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write-side feedback use-cases.
    pub feedback: Arc<dyn FeedbackCommand>,
    /// Read-side feedback use-cases.
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

impl HttpState {
    /// Construct state from the feedback driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use feedback_backend::domain::{FeedbackCommandService, FeedbackQueryService};
    /// use feedback_backend::inbound::http::state::HttpState;
    /// use feedback_backend::outbound::memory::InMemoryFeedbackRepository;
    /// use mockable::DefaultClock;
    ///
    /// let repo = Arc::new(InMemoryFeedbackRepository::default());
    /// let state = HttpState::new(
    ///     Arc::new(FeedbackCommandService::new(repo.clone())),
    ///     Arc::new(FeedbackQueryService::new(repo, Arc::new(DefaultClock))),
    /// );
    /// # let _ = state;
    /// ```
    pub fn new(feedback: Arc<dyn FeedbackCommand>, feedback_query: Arc<dyn FeedbackQuery>) -> Self {
        Self {
            feedback,
            feedback_query,
        }
    }
}
