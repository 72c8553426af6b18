//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and follows these patterns:
//! - Pool-scoped queries build table names from `linc_core::Pool`
//! - Conflicts are handled via ON CONFLICT / conditional UPDATE
//! - Multi-step operations run in one transaction

pub mod branches;
pub mod claims;
pub mod topics;
pub mod users;

pub use branches::BranchRepo;
pub use claims::{ClaimOutcome, ClaimRepo, ClaimReport};
pub use topics::{HeldTopic, Topic, TopicRepo};
pub use users::{RegistrationOutcome, UserRepo};

use linc_core::Pool;
use sqlx::PgConnection;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unexpected pool tag '{0}' in query result")]
    UnknownPool(String),
}

/// Serialise work on one user name for the rest of the transaction.
///
/// Registration and claims both take this lock, so two requests for the
/// same name cannot interleave their read-then-write sequences.
pub(crate) async fn lock_user(conn: &mut PgConnection, name: &str) -> Result<(), DbError> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(name)
        .execute(conn)
        .await?;
    Ok(())
}

/// Number of topics assigned to `name` across every pool.
pub(crate) async fn count_held(conn: &mut PgConnection, name: &str) -> Result<i64, DbError> {
    let sql = Pool::ALL
        .iter()
        .map(|pool| format!("(SELECT COUNT(*) FROM {} WHERE assigned_to = $1)", pool.table()))
        .collect::<Vec<_>>()
        .join(" + ");

    let (held,): (i64,) = sqlx::query_as(&format!("SELECT {sql}"))
        .bind(name)
        .fetch_one(conn)
        .await?;
    Ok(held)
}

/// Whether `name` has a row in `users`.
pub(crate) async fn user_exists(conn: &mut PgConnection, name: &str) -> Result<bool, DbError> {
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE name = $1)")
        .bind(name)
        .fetch_one(conn)
        .await?;
    Ok(exists)
}
