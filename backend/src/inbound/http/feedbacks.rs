//! Feedback submission, listing, and deletion handlers.
//!
//! ```text
//! POST /api/feedbacks {"category":"que_bom","content":"Great service overall!"}
//! GET /api/feedbacks?category=que_bom&limit=20&offset=0
//! DELETE /api/feedbacks/{id}
//! DELETE /api/feedbacks
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::{ListFeedbacksRequest, SubmitFeedbackRequest};
use crate::domain::{Feedback, FeedbackFilter, FeedbackId, PageRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, FeedbackSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_u64};

const SUBMITTED: &str = "Feedback enviado com sucesso!";
const DELETED: &str = "Feedback removido";
const PURGED: &str = "Todos os feedbacks foram removidos";

const LIMIT: FieldName = FieldName::new("limit");
const OFFSET: FieldName = FieldName::new("offset");

/// Request body for `POST /api/feedbacks`.
///
/// Both fields are optional at the wire level so a missing field surfaces as
/// the domain's `missing_field` error rather than a deserialisation failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SubmitFeedbackBody {
    /// One of `que_bom`, `que_pena`, `que_tal`.
    #[schema(example = "que_bom")]
    pub category: Option<String>,
    /// Free text, 10 to 1000 characters once trimmed.
    #[schema(example = "Great service overall!")]
    pub content: Option<String>,
}

impl From<SubmitFeedbackBody> for SubmitFeedbackRequest {
    fn from(value: SubmitFeedbackBody) -> Self {
        Self {
            category: value.category,
            content: value.content,
        }
    }
}

/// Response body for a stored submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitFeedbackResponseBody {
    /// Always `true` for a stored submission.
    pub success: bool,
    /// Identifier assigned by the store.
    #[schema(example = 1)]
    pub id: i64,
    /// Confirmation shown to the submitter.
    #[schema(example = "Feedback enviado com sucesso!")]
    pub message: String,
}

/// Query parameters for `GET /api/feedbacks`.
///
/// Paging values are taken as strings and validated by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct ListFeedbacksQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListFeedbacksQuery {
    fn into_request(self) -> ApiResult<ListFeedbacksRequest> {
        let limit = parse_optional_u64(self.limit.as_deref(), LIMIT)?;
        let offset = parse_optional_u64(self.offset.as_deref(), OFFSET)?;
        Ok(ListFeedbacksRequest {
            filter: FeedbackFilter::from_query(self.category),
            page: PageRequest::new(limit, offset),
        })
    }
}

/// Response body for a listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListFeedbacksResponseBody {
    #[schema(value_type = Vec<FeedbackSchema>)]
    pub feedbacks: Vec<Feedback>,
    /// Number of records in `feedbacks`.
    pub count: usize,
}

/// Response body for a deletion.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFeedbackResponseBody {
    /// Always `true`; a missing record is not an error.
    pub success: bool,
    /// Confirmation message.
    #[schema(example = "Feedback removido")]
    pub message: String,
}

/// Response body for a purge.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PurgeFeedbackResponseBody {
    /// Always `true` once every step completed.
    pub success: bool,
    /// Confirmation message.
    #[schema(example = "Todos os feedbacks foram removidos")]
    pub message: String,
    /// Number of records captured before deletion.
    pub backup_count: usize,
}

/// Submit a feedback record.
#[utoipa::path(
    post,
    path = "/api/feedbacks",
    request_body = SubmitFeedbackBody,
    responses(
        (status = 201, description = "Feedback stored", body = SubmitFeedbackResponseBody),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "submitFeedback"
)]
#[post("/feedbacks")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitFeedbackBody>,
) -> ApiResult<HttpResponse> {
    let response = state.feedback.submit(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(SubmitFeedbackResponseBody {
        success: true,
        id: response.id.get(),
        message: SUBMITTED.to_owned(),
    }))
}

/// List feedback records, newest first.
#[utoipa::path(
    get,
    path = "/api/feedbacks",
    params(
        ("category" = Option<String>, Query, description = "Exact category to match; empty lists all"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return, default 100"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, default 0")
    ),
    responses(
        (status = 200, description = "Matching records", body = ListFeedbacksResponseBody),
        (status = 400, description = "Malformed paging values", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "listFeedbacks"
)]
#[get("/feedbacks")]
pub async fn list_feedbacks(
    state: web::Data<HttpState>,
    query: web::Query<ListFeedbacksQuery>,
) -> ApiResult<web::Json<ListFeedbacksResponseBody>> {
    let request = query.into_inner().into_request()?;
    let response = state.feedback_query.list(request).await?;
    let count = response.feedbacks.len();
    Ok(web::Json(ListFeedbacksResponseBody {
        feedbacks: response.feedbacks,
        count,
    }))
}

/// Delete one record. Succeeds even when no record matched.
///
/// An id that is not an integer cannot match a stored record, so it is
/// answered as a deletion of nothing without reaching the store.
#[utoipa::path(
    delete,
    path = "/api/feedbacks/{id}",
    params(("id" = String, Path, description = "Feedback identifier")),
    responses(
        (status = 200, description = "Record removed or absent", body = DeleteFeedbackResponseBody),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "deleteFeedback"
)]
#[delete("/feedbacks/{id}")]
pub async fn delete_feedback(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteFeedbackResponseBody>> {
    match path.trim().parse::<i64>() {
        Ok(id) => state.feedback.delete(FeedbackId::new(id)).await?,
        Err(_) => debug!(id = %path.as_str(), "delete for non-integer id matches nothing"),
    }
    Ok(web::Json(DeleteFeedbackResponseBody {
        success: true,
        message: DELETED.to_owned(),
    }))
}

/// Delete every record and restart id assignment at 1.
#[utoipa::path(
    delete,
    path = "/api/feedbacks",
    responses(
        (status = 200, description = "All records removed", body = PurgeFeedbackResponseBody),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["feedbacks"],
    operation_id = "purgeFeedbacks"
)]
#[delete("/feedbacks")]
pub async fn purge_feedbacks(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<PurgeFeedbackResponseBody>> {
    let response = state.feedback.purge().await?;
    Ok(web::Json(PurgeFeedbackResponseBody {
        success: true,
        message: PURGED.to_owned(),
        backup_count: response.backup_count(),
    }))
}

#[cfg(test)]
#[path = "feedbacks_tests.rs"]
mod tests;
