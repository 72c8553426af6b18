//! Branch repository
//!
//! Branches are static reference data, read-only at runtime.

use linc_core::{pick_random_branches, Interest};
use sqlx::PgPool;

use super::DbError;

/// Branch repository
pub struct BranchRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BranchRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Branch names whose type exactly equals the interest, in storage order.
    ///
    /// `Both` matches branches typed `both` only; it is not the union of the
    /// other two categories.
    pub async fn list(&self, interest: Interest) -> Result<Vec<String>, DbError> {
        let names: Vec<(String,)> =
            sqlx::query_as("SELECT branch_name FROM branches WHERE type = $1")
                .bind(interest.as_str())
                .fetch_all(self.pool)
                .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    /// Random subset of [`BranchRepo::list`], see [`pick_random_branches`].
    pub async fn random(&self, interest: Interest) -> Result<Vec<String>, DbError> {
        let all = self.list(interest).await?;
        let picked = pick_random_branches(&all, &mut rand::thread_rng());

        tracing::debug!(
            interest = %interest,
            available = all.len(),
            picked = picked.len(),
            "random branch pick"
        );
        Ok(picked)
    }
}
