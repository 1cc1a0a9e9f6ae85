//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod export;
pub mod feedbacks;
pub mod health;
pub mod schemas;
pub mod state;
pub mod stats;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The `/api` scope with every feedback route and extractor error handlers.
///
/// Callers supply [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use feedback_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(feedbacks::submit_feedback)
        .service(feedbacks::list_feedbacks)
        .service(feedbacks::delete_feedback)
        .service(feedbacks::purge_feedbacks)
        .service(stats::feedback_stats)
        .service(export::export_feedbacks)
}
