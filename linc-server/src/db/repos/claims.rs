//! Claim repository
//!
//! The only write path with a correctness property: no topic is assigned
//! twice and no user ends up holding more than `TOPIC_QUOTA` topics.
//!
//! Everything runs in one transaction:
//! 1. advisory lock on the user name (serialises claims by the same user)
//! 2. resolve the pool (pinned by interest, or looked up across pools)
//! 3. `SELECT ... FOR UPDATE` on the requested rows
//! 4. count held topics across all pools, check the quota
//! 5. conditional `UPDATE ... WHERE assigned_to IS NULL RETURNING`
//!
//! Dropping the transaction without commit rolls it back, so every early
//! return leaves the store untouched.

use linc_core::{
    plan_claim, resolve_pool, ClaimDecision, Interest, Pool, PoolResolution, TopicId,
    TopicSelection, TopicState, UserName,
};
use sqlx::{PgConnection, PgPool};

use super::{count_held, lock_user, user_exists, DbError, Topic};

/// What happened to each requested topic of a committed claim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimReport {
    /// Pool the claim ran against, `None` when no id could be found
    pub pool: Option<Pool>,
    /// Topics now assigned to the claimant by this request
    pub claimed: Vec<Topic>,
    /// Ids assigned to somebody else first
    pub taken: Vec<TopicId>,
    /// Ids the claimant already held before this request
    pub already_held: Vec<TopicId>,
    /// Ids that do not exist in the pool
    pub missing: Vec<TopicId>,
}

/// Result of a claim request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Completed(ClaimReport),
    /// Nothing written: the new topics would push the user over the quota
    QuotaExceeded { held: usize, requested: usize },
    /// Nothing written: the ids exist in several pools
    MixedPools(Vec<Pool>),
    /// Nothing written: the name was never registered
    UnknownUser,
}

/// Claim repository
pub struct ClaimRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClaimRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Claim `selection` for `user`.
    ///
    /// `interest` pins the pool when the request came from a topic listing;
    /// without it the pool is resolved from the ids themselves.
    pub async fn claim(
        &self,
        user: &UserName,
        selection: &TopicSelection,
        interest: Option<Interest>,
    ) -> Result<ClaimOutcome, DbError> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut *tx, user.as_str()).await?;

        if !user_exists(&mut *tx, user.as_str()).await? {
            return Ok(ClaimOutcome::UnknownUser);
        }

        let pool = match interest {
            Some(interest) => interest.pool(),
            None => {
                let hits = locate(&mut *tx, selection).await?;
                match resolve_pool(&hits) {
                    PoolResolution::Single(pool) => pool,
                    PoolResolution::Mixed(pools) => {
                        tracing::info!(user = %user, ?pools, "claim spans several pools");
                        return Ok(ClaimOutcome::MixedPools(pools));
                    }
                    PoolResolution::Unknown => {
                        return Ok(ClaimOutcome::Completed(ClaimReport {
                            missing: selection.iter().collect(),
                            ..ClaimReport::default()
                        }));
                    }
                }
            }
        };

        let rows = lock_rows(&mut *tx, pool, selection).await?;
        let held = count_held(&mut *tx, user.as_str()).await?;
        let held = usize::try_from(held).unwrap_or(usize::MAX);

        let plan = match plan_claim(user, selection, &rows, held) {
            ClaimDecision::Proceed(plan) => plan,
            ClaimDecision::QuotaExceeded { held, requested } => {
                tracing::info!(user = %user, held, requested, "claim rejected, quota reached");
                return Ok(ClaimOutcome::QuotaExceeded { held, requested });
            }
        };

        let claimed = if plan.available.is_empty() {
            Vec::new()
        } else {
            assign(&mut *tx, pool, user, &plan.available).await?
        };

        tx.commit().await?;

        // Rows are locked, so every available id should come back from the
        // UPDATE. Anything that did not is reported as taken, never as claimed.
        let mut taken = plan.taken;
        taken.extend(
            plan.available
                .iter()
                .copied()
                .filter(|id| !claimed.iter().any(|topic| topic.id == id.get())),
        );
        taken.sort();

        tracing::info!(
            user = %user,
            pool = %pool,
            claimed = claimed.len(),
            taken = taken.len(),
            missing = plan.missing.len(),
            "claim committed"
        );

        Ok(ClaimOutcome::Completed(ClaimReport {
            pool: Some(pool),
            claimed,
            taken,
            already_held: plan.already_held,
            missing: plan.missing,
        }))
    }
}

/// Find which pools contain the requested ids.
async fn locate(
    conn: &mut PgConnection,
    selection: &TopicSelection,
) -> Result<Vec<(Pool, TopicId)>, DbError> {
    let sql = Pool::ALL
        .iter()
        .map(|pool| {
            format!(
                "SELECT '{table}' AS pool, id FROM {table} WHERE id = ANY($1)",
                table = pool.table()
            )
        })
        .collect::<Vec<_>>()
        .join(" UNION ALL ");

    let rows: Vec<(String, i32)> = sqlx::query_as(&sql)
        .bind(selection.to_i32_vec())
        .fetch_all(conn)
        .await?;

    rows.into_iter()
        .filter_map(|(tag, id)| TopicId::new(id).ok().map(|id| (tag, id)))
        .map(|(tag, id)| match Pool::from_table(&tag) {
            Some(pool) => Ok((pool, id)),
            None => Err(DbError::UnknownPool(tag)),
        })
        .collect()
}

/// Lock the requested rows and read who holds them.
///
/// Rows are locked in id order so concurrent claims over overlapping ids
/// cannot deadlock.
async fn lock_rows(
    conn: &mut PgConnection,
    pool: Pool,
    selection: &TopicSelection,
) -> Result<Vec<TopicState>, DbError> {
    let sql = format!(
        "SELECT id, assigned_to FROM {} WHERE id = ANY($1) ORDER BY id FOR UPDATE",
        pool.table()
    );

    let rows: Vec<(i32, Option<String>)> = sqlx::query_as(&sql)
        .bind(selection.to_i32_vec())
        .fetch_all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(id, assigned_to)| {
            TopicId::new(id)
                .ok()
                .map(|id| TopicState { id, assigned_to })
        })
        .collect())
}

/// Conditionally assign the ids, returning the rows actually written.
async fn assign(
    conn: &mut PgConnection,
    pool: Pool,
    user: &UserName,
    ids: &[TopicId],
) -> Result<Vec<Topic>, DbError> {
    let sql = format!(
        "UPDATE {} SET assigned_to = $1 \
         WHERE id = ANY($2) AND assigned_to IS NULL \
         RETURNING id, branch, topic, assigned_to",
        pool.table()
    );
    let ids: Vec<i32> = ids.iter().map(TopicId::get).collect();

    let mut claimed: Vec<Topic> = sqlx::query_as(&sql)
        .bind(user.as_str())
        .bind(ids)
        .fetch_all(conn)
        .await?;

    claimed.sort_by_key(|topic| topic.id);
    Ok(claimed)
}
