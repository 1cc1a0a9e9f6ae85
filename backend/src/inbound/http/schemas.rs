//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module registers the schemas utoipa needs for the documented endpoints,
//! mirroring the serialized shape of each domain type.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa derive output"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Categoria inválida")]
    message: String,
    /// Correlation identifier matching the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context, present on validation errors.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::FeedbackCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FeedbackCategory)]
pub enum FeedbackCategorySchema {
    /// Praise.
    #[schema(rename = "que_bom")]
    QueBom,
    /// Complaint.
    #[schema(rename = "que_pena")]
    QuePena,
    /// Suggestion.
    #[schema(rename = "que_tal")]
    QueTal,
}

/// OpenAPI schema for [`crate::domain::Feedback`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Feedback)]
pub struct FeedbackSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    category: FeedbackCategorySchema,
    /// Trimmed text, 10 to 1000 characters.
    #[schema(example = "Great service overall!")]
    content: String,
    /// Insertion time, RFC 3339.
    #[schema(value_type = String, format = DateTime, example = "2026-10-19T12:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::CategoryCount`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CategoryCount)]
pub struct CategoryCountSchema {
    category: FeedbackCategorySchema,
    #[schema(example = 3)]
    count: u64,
}

/// OpenAPI schema for [`crate::domain::DailyCount`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DailyCount)]
pub struct DailyCountSchema {
    /// UTC calendar day.
    #[schema(value_type = String, format = Date, example = "2026-10-19")]
    date: String,
    #[schema(example = 2)]
    count: u64,
}

/// OpenAPI schema for [`crate::domain::FeedbackStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FeedbackStats)]
pub struct FeedbackStatsSchema {
    /// Number of stored records.
    total: u64,
    /// Counts for categories that have records, ordered by name.
    by_category: Vec<CategoryCountSchema>,
    /// Counts per UTC day over the trailing 30 days, newest first.
    daily: Vec<DailyCountSchema>,
}
