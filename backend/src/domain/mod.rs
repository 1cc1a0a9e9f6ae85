//! Domain model, ports, and services.
//!
//! Purpose: hold the feedback rules and use-cases independent of HTTP and of
//! the storage engine. Adapters under `inbound` and `outbound` depend on this
//! module, never the other way round.

pub mod error;
pub mod export;
pub mod feedback;
mod feedback_service;
pub mod ports;
pub mod stats;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::export::{ExportDocument, ExportFormat, export_file_name};
pub use self::feedback::{
    DEFAULT_PAGE_LIMIT, Feedback, FeedbackCategory, FeedbackContent, FeedbackDraft,
    FeedbackField, FeedbackFilter, FeedbackId, FeedbackValidationError, MAX_CONTENT_CHARS,
    MIN_CONTENT_CHARS, PageRequest, ParseFeedbackCategoryError,
};
pub use self::feedback_service::{FeedbackCommandService, FeedbackQueryService, LARGE_PAGE_LIMIT};
pub use self::stats::{
    CategoryCount, DAILY_WINDOW_DAYS, DailyCount, FeedbackStats, daily_window_start,
};
pub use self::trace_id::TraceId;
