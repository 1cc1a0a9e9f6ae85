//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every feedback endpoint, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`] so domain types stay
//! free of utoipa derives. The document backs Swagger UI in debug builds and
//! the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::feedbacks::{
    DeleteFeedbackResponseBody, ListFeedbacksResponseBody, PurgeFeedbackResponseBody,
    SubmitFeedbackBody, SubmitFeedbackResponseBody,
};
use crate::inbound::http::schemas::{
    CategoryCountSchema, DailyCountSchema, ErrorCodeSchema, ErrorSchema, FeedbackCategorySchema,
    FeedbackSchema, FeedbackStatsSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feedback service API",
        description = "Anonymous categorised feedback: submission, listing, statistics, export, and administrative deletion."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::feedbacks::submit_feedback,
        crate::inbound::http::feedbacks::list_feedbacks,
        crate::inbound::http::feedbacks::delete_feedback,
        crate::inbound::http::feedbacks::purge_feedbacks,
        crate::inbound::http::stats::feedback_stats,
        crate::inbound::http::export::export_feedbacks,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        FeedbackSchema,
        FeedbackCategorySchema,
        FeedbackStatsSchema,
        CategoryCountSchema,
        DailyCountSchema,
        SubmitFeedbackBody,
        SubmitFeedbackResponseBody,
        ListFeedbacksResponseBody,
        DeleteFeedbackResponseBody,
        PurgeFeedbackResponseBody,
    )),
    tags(
        (name = "feedbacks", description = "Feedback submission and dashboard queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
