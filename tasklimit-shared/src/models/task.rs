//! Task model and database operations
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id SERIAL PRIMARY KEY,
//!     username TEXT,
//!     task TEXT,
//!     date DATE
//! );
//! ```
//!
//! Task rows are write-once. Inserts go through the quota-enforcing path in
//! [`crate::quota`]; the helpers here take a generic executor so they can run
//! inside that transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// A recorded task for a user on a given day
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the database
    pub id: i32,

    /// Username this task belongs to
    ///
    /// Must reference a row in `user_limits`; the quota path rejects unknown
    /// usernames before any insert happens.
    pub username: String,

    /// Task description
    pub task: String,

    /// Calendar day the task was recorded for (server-local date)
    pub date: NaiveDate,
}

impl Task {
    /// Counts tasks recorded for a user on a given day
    pub async fn count_for_day(
        executor: impl PgExecutor<'_>,
        username: &str,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM tasks
            WHERE username = $1 AND date = $2
            "#,
        )
        .bind(username)
        .bind(date)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Inserts a task row and returns it
    ///
    /// Performs no quota check; callers go through
    /// [`crate::quota::TaskQuota::add_task`] which wraps this in the
    /// limit-checking transaction.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        username: &str,
        task: &str,
        date: NaiveDate,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (username, task, date)
            VALUES ($1, $2, $3)
            RETURNING id, username, task, date
            "#,
        )
        .bind(username)
        .bind(task)
        .bind(date)
        .fetch_one(executor)
        .await?;

        Ok(task)
    }
}
