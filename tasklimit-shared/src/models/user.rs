//! User model and database operations
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     name TEXT,
//!     email TEXT
//! );
//! ```
//!
//! Users are write-once at this layer: they are created and never updated or
//! deleted. Email uniqueness is not enforced here; a duplicate is only
//! rejected if the database itself carries a constraint.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A user account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the database
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Input for creating a new user
///
/// Non-emptiness of both fields is the caller's responsibility; this layer
/// inserts whatever it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Returns
    ///
    /// The newly created user with its generated ID
    ///
    /// # Errors
    ///
    /// Any storage failure (connection loss, constraint violation) is
    /// returned unmodified; there are no retries.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tasklimit_shared::models::user::{User, CreateUser};
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
    /// let user = User::create(
    ///     &pool,
    ///     CreateUser {
    ///         name: "Jane Doe".to_string(),
    ///         email: "jane@example.com".to_string(),
    ///     },
    /// )
    /// .await?;
    /// println!("Created user: {}", user.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}
