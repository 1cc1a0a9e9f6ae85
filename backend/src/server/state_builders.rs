//! Builders for the HTTP state from the configured feedback store.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use feedback_backend::domain::ports::FeedbackRepository;
use feedback_backend::domain::{FeedbackCommandService, FeedbackQueryService};
use feedback_backend::inbound::http::state::HttpState;
use feedback_backend::outbound::memory::InMemoryFeedbackRepository;
use feedback_backend::outbound::persistence::DieselFeedbackRepository;

use super::ServerConfig;

/// Wire both driving ports over one shared repository.
fn feedback_state<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: FeedbackRepository + 'static,
{
    HttpState::new(
        Arc::new(FeedbackCommandService::new(Arc::clone(&repo))),
        Arc::new(FeedbackQueryService::new(repo, clock)),
    )
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, otherwise
/// by the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "feedback store configured");
            feedback_state(Arc::new(DieselFeedbackRepository::new(pool.clone())), clock)
        }
        None => {
            warn!(
                store = "memory",
                "no database configured; feedback will not survive restarts"
            );
            feedback_state(Arc::new(InMemoryFeedbackRepository::default()), clock)
        }
    };
    web::Data::new(state)
}
