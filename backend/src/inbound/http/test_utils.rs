//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::{App, web};
use chrono::{DateTime, Utc};
use mockable::{Clock, MockClock};

use crate::domain::{FeedbackCommandService, FeedbackQueryService};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryFeedbackRepository;

/// Clock frozen at `now` for any number of reads.
pub(crate) fn frozen_clock(now: DateTime<Utc>) -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(now);
    Arc::new(clock)
}

/// Real services over an in-memory store whose records and export stamps
/// both use `now`.
pub(crate) fn in_memory_state(now: DateTime<Utc>) -> HttpState {
    let repo = Arc::new(InMemoryFeedbackRepository::with_clock(frozen_clock(now)));
    HttpState::new(
        Arc::new(FeedbackCommandService::new(Arc::clone(&repo))),
        Arc::new(FeedbackQueryService::new(repo, frozen_clock(now))),
    )
}

/// App serving the `/api` scope over `state`.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}
