//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the feedback repository backed by PostgreSQL via Diesel, with
//! async support through `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapter**: the repository only translates between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never reach the domain layer.
//! - **Typed errors**: database failures map to
//!   [`FeedbackRepositoryError`](crate::domain::ports::FeedbackRepositoryError).
//!
//! # Example
//!
//! ```ignore
//! use feedback_backend::outbound::persistence::{
//!     DbPool, DieselFeedbackRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/feedback")).await?;
//! let repo = DieselFeedbackRepository::new(pool);
//! ```

mod diesel_feedback_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_feedback_repository::DieselFeedbackRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
