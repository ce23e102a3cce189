//! Per-user daily quota model
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE user_limits (
//!     username TEXT PRIMARY KEY,
//!     max_tasks INT
//! );
//! ```
//!
//! This table is provisioned by an external process; the API never writes to
//! it. Absence of a row for a username is an error condition, not a zero
//! quota.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnection;

/// A user's daily task quota
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserLimit {
    /// Username the quota applies to
    pub username: String,

    /// Maximum number of tasks this user may record per calendar day
    pub max_tasks: i32,
}

impl UserLimit {
    /// Fetches a user's quota row and locks it for the current transaction
    ///
    /// `SELECT ... FOR UPDATE` serializes concurrent quota checks for the
    /// same username: a second transaction blocks here until the first
    /// commits or rolls back, so the count it then reads includes the first
    /// transaction's insert.
    ///
    /// # Returns
    ///
    /// The quota row if one exists, None otherwise
    pub async fn lock_for_user(
        conn: &mut PgConnection,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let limit = sqlx::query_as::<_, UserLimit>(
            r#"
            SELECT username, max_tasks
            FROM user_limits
            WHERE username = $1
            FOR UPDATE
            "#,
        )
        .bind(username)
        .fetch_optional(conn)
        .await?;

        Ok(limit)
    }
}
