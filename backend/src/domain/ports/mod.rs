//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod feedback_command;
mod feedback_query;
mod feedback_repository;

#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::{
    FeedbackCommand, PurgeFeedbackResponse, SubmitFeedbackRequest, SubmitFeedbackResponse,
};
#[cfg(test)]
pub use feedback_query::MockFeedbackQuery;
pub use feedback_query::{
    ExportFeedbacksRequest, FeedbackQuery, ListFeedbacksRequest, ListFeedbacksResponse,
};
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
