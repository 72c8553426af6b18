//! User repository
//!
//! Registration runs as one transaction:
//! - advisory lock on the name
//! - reject names that exist or already hold topics
//! - INSERT ... ON CONFLICT DO NOTHING so the primary key has the last word

use linc_core::UserName;
use sqlx::PgPool;

use super::{count_held, lock_user, user_exists, DbError};

/// Result of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    NameTaken,
    /// Name was never registered but topics are already assigned to it
    HasTopics,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a name if it is unused and holds no topics.
    pub async fn register(&self, name: &UserName) -> Result<RegistrationOutcome, DbError> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut *tx, name.as_str()).await?;

        if user_exists(&mut *tx, name.as_str()).await? {
            return Ok(RegistrationOutcome::NameTaken);
        }

        if count_held(&mut *tx, name.as_str()).await? > 0 {
            return Ok(RegistrationOutcome::HasTopics);
        }

        let inserted = sqlx::query("INSERT INTO users (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if inserted == 0 {
            return Ok(RegistrationOutcome::NameTaken);
        }

        tracing::info!(user = %name, "user registered");
        Ok(RegistrationOutcome::Registered)
    }
}
