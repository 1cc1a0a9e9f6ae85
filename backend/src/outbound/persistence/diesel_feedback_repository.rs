//! PostgreSQL-backed `FeedbackRepository` implementation using Diesel ORM.
//!
//! Each port method runs one statement on a pooled connection. Rows are
//! rebuilt through the domain constructors so a row that violates the domain
//! rules surfaces as a query error instead of leaking out.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::count_star;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Timestamptz;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError};
use crate::domain::{
    CategoryCount, DailyCount, Feedback, FeedbackCategory, FeedbackContent, FeedbackDraft,
    FeedbackFilter, FeedbackId, PageRequest,
};

use super::models::{DailyCountRow, FeedbackRow, NewFeedbackRow};
use super::pool::{DbPool, PoolError};
use super::schema::feedbacks;

const DAILY_COUNTS_SQL: &str = "\
    SELECT (created_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count \
    FROM feedbacks \
    WHERE created_at >= $1 \
    GROUP BY day \
    ORDER BY day DESC";

const RESET_SEQUENCE_SQL: &str = "ALTER SEQUENCE feedbacks_id_seq RESTART WITH 1";

/// Diesel-backed implementation of the feedback repository port.
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FeedbackRepositoryError {
    FeedbackRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> FeedbackRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FeedbackRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            FeedbackRepositoryError::query("feedback violates table constraints")
        }
        DieselError::DatabaseError(_, info) => FeedbackRepositoryError::query(info.message()),
        DieselError::QueryBuilderError(_) => FeedbackRepositoryError::query("database query error"),
        _ => FeedbackRepositoryError::query("database error"),
    }
}

fn to_count(value: i64) -> Result<u64, FeedbackRepositoryError> {
    u64::try_from(value)
        .map_err(|_| FeedbackRepositoryError::query(format!("negative row count: {value}")))
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn parse_category(value: &str) -> Result<FeedbackCategory, FeedbackRepositoryError> {
    value
        .parse::<FeedbackCategory>()
        .map_err(|err| FeedbackRepositoryError::query(err.to_string()))
}

/// Convert a database row into a validated domain record.
fn row_to_feedback(row: FeedbackRow) -> Result<Feedback, FeedbackRepositoryError> {
    let FeedbackRow {
        id,
        category,
        content,
        created_at,
    } = row;

    let category = parse_category(&category)?;
    let content = FeedbackContent::new(&content).map_err(|err| {
        FeedbackRepositoryError::query(format!("stored feedback {id} is invalid: {err}"))
    })?;
    Ok(Feedback::new(
        FeedbackId::new(id),
        FeedbackDraft::new(category, content),
        created_at,
    ))
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn insert(&self, draft: &FeedbackDraft) -> Result<Feedback, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewFeedbackRow {
            category: draft.category().as_str(),
            content: draft.content().as_str(),
        };

        let row = diesel::insert_into(feedbacks::table)
            .values(&new_row)
            .returning(FeedbackRow::as_returning())
            .get_result::<FeedbackRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_feedback(row)
    }

    async fn list(
        &self,
        filter: &FeedbackFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = feedbacks::table
            .select(FeedbackRow::as_select())
            .order((feedbacks::created_at.desc(), feedbacks::id.desc()))
            .into_boxed::<Pg>();
        if let Some(category) = filter.category() {
            query = query.filter(feedbacks::category.eq(category.to_owned()));
        }
        if let Some(page) = page {
            query = query
                .limit(to_sql_bound(page.limit))
                .offset(to_sql_bound(page.offset));
        }

        let rows = query
            .load::<FeedbackRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_feedback).collect()
    }

    async fn count_all(&self) -> Result<u64, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total = feedbacks::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_count(total)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = feedbacks::table
            .group_by(feedbacks::category)
            .select((feedbacks::category, count_star()))
            .order(feedbacks::category.asc())
            .load::<(String, i64)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(category, count)| {
                Ok(CategoryCount {
                    category: parse_category(&category)?,
                    count: to_count(count)?,
                })
            })
            .collect()
    }

    async fn count_daily_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DailyCount>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = diesel::sql_query(DAILY_COUNTS_SQL)
            .bind::<Timestamptz, _>(since)
            .load::<DailyCountRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(DailyCount {
                    date: row.day,
                    count: to_count(row.count)?,
                })
            })
            .collect()
    }

    async fn delete_by_id(&self, id: FeedbackId) -> Result<u64, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(feedbacks::table.filter(feedbacks::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }

    async fn delete_all(&self) -> Result<u64, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(feedbacks::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }

    async fn reset_id_sequence(&self) -> Result<(), FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query(RESET_SEQUENCE_SQL)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
