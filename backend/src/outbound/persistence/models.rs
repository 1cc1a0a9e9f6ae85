//! Internal Diesel row structs for the feedback table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date};

use super::schema::feedbacks;

/// Row read from `feedbacks`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedbacks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedbackRow {
    pub id: i64,
    pub category: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable row; `id` and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedbacks)]
pub(crate) struct NewFeedbackRow<'a> {
    pub category: &'a str,
    pub content: &'a str,
}

/// One bucket of the daily histogram query.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct DailyCountRow {
    #[diesel(sql_type = Date)]
    pub day: NaiveDate,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}
