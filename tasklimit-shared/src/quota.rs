//! Daily task quota enforcement
//!
//! Each username has a per-day task cap in the `user_limits` table. Adding a
//! task is an atomic compare-and-increment of a per-(username, date) counter
//! bounded by that cap.
//!
//! The check and the insert run in a single transaction that first takes a
//! row-level lock on the user's `user_limits` row. Two concurrent adds for
//! the same username therefore serialize: the invariant
//! `count(tasks for username, date) <= max_tasks` holds even under
//! concurrent writers, and a pair of simultaneous adds at `max_tasks - 1`
//! yields exactly one success and one [`QuotaError::LimitReached`].
//!
//! # Example
//!
//! ```no_run
//! use tasklimit_shared::quota::TaskQuota;
//! use chrono::Local;
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let quota = TaskQuota::new(pool);
//!
//! let today = Local::now().date_naive();
//! let task = quota.add_task("jane", "water the plants", today).await?;
//! println!("Recorded task {}", task.id);
//! # Ok(())
//! # }
//! ```

use crate::models::task::Task;
use crate::models::user_limit::UserLimit;
use chrono::NaiveDate;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

/// Quota enforcement error
#[derive(Debug, Error)]
pub enum QuotaError {
    /// The user already has `max_tasks` tasks for the day
    #[error("task limit reached for user {username}")]
    LimitReached {
        /// User whose quota is exhausted
        username: String,

        /// The user's daily cap
        max_tasks: i32,

        /// Tasks already recorded for the day
        current: i64,
    },

    /// No `user_limits` row exists for the username
    #[error("no task limit configured for user {0}")]
    NoLimitConfigured(String),

    /// Underlying storage failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Quota-enforcing task repository
///
/// The only write path for the `tasks` table.
pub struct TaskQuota {
    db: PgPool,
}

impl TaskQuota {
    /// Creates a new quota-enforcing repository
    pub fn new(db: PgPool) -> Self {
        TaskQuota { db }
    }

    /// Records a task for a user on a given day, subject to the user's quota
    ///
    /// Runs as a single transaction:
    ///
    /// 1. Lock the user's `user_limits` row (`FOR UPDATE`). No row means the
    ///    username is not provisioned and the operation fails without
    ///    touching the `tasks` table.
    /// 2. Count existing tasks for (username, date).
    /// 3. Reject with [`QuotaError::LimitReached`] if the count has reached
    ///    `max_tasks`; otherwise insert the task row and commit.
    ///
    /// # Errors
    ///
    /// - [`QuotaError::NoLimitConfigured`] for an unknown username
    /// - [`QuotaError::LimitReached`] when the day's quota is exhausted
    /// - [`QuotaError::Database`] for any storage failure
    pub async fn add_task(
        &self,
        username: &str,
        task: &str,
        date: NaiveDate,
    ) -> Result<Task, QuotaError> {
        let mut tx = self.db.begin().await?;

        let limit = UserLimit::lock_for_user(&mut tx, username)
            .await?
            .ok_or_else(|| QuotaError::NoLimitConfigured(username.to_string()))?;

        let current = Task::count_for_day(&mut *tx, username, date).await?;

        debug!(
            username,
            %date,
            current,
            max_tasks = limit.max_tasks,
            "Checked daily task quota"
        );

        if current >= i64::from(limit.max_tasks) {
            // Dropping the transaction rolls it back and releases the lock.
            return Err(QuotaError::LimitReached {
                username: username.to_string(),
                max_tasks: limit.max_tasks,
                current,
            });
        }

        let task = Task::insert(&mut *tx, username, task, date).await?;
        tx.commit().await?;

        Ok(task)
    }
}
