//! Download handler for feedback exports.
//!
//! ```text
//! GET /api/export?format=csv&category=que_pena
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::domain::ports::ExportFeedbacksRequest;
use crate::domain::{ExportFormat, FeedbackFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FeedbackSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/export`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    pub category: Option<String>,
}

impl From<ExportQuery> for ExportFeedbacksRequest {
    fn from(value: ExportQuery) -> Self {
        Self {
            format: ExportFormat::from_query(value.format.as_deref()),
            filter: FeedbackFilter::from_query(value.category),
        }
    }
}

/// Download every matching record as an attachment.
#[utoipa::path(
    get,
    path = "/api/export",
    params(
        ("format" = Option<String>, Query, description = "`csv` for CSV; anything else yields JSON"),
        ("category" = Option<String>, Query, description = "Exact category to match; empty exports all")
    ),
    responses(
        (
            status = 200,
            description = "Export file; a CSV document when `format=csv`",
            headers(("Content-Disposition" = String, description = "Attachment file name")),
            body = Vec<FeedbackSchema>
        ),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "exportFeedbacks"
)]
#[get("/export")]
pub async fn export_feedbacks(
    state: web::Data<HttpState>,
    query: web::Query<ExportQuery>,
) -> ApiResult<HttpResponse> {
    let document = state.feedback_query.export(query.into_inner().into()).await?;
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, document.format.content_type()))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        ))
        .body(document.body))
}
