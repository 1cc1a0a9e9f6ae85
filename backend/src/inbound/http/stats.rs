//! Aggregate statistics handler.
//!
//! ```text
//! GET /api/stats
//! ```

use actix_web::{get, web};

use crate::domain::FeedbackStats;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FeedbackStatsSchema};
use crate::inbound::http::state::HttpState;

/// Per-category counts, total, and a 30-day daily histogram.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate counts", body = FeedbackStatsSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "feedbackStats"
)]
#[get("/stats")]
pub async fn feedback_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<FeedbackStats>> {
    let stats = state.feedback_query.stats().await?;
    Ok(web::Json(stats))
}
