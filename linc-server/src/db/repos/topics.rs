//! Topic repository
//!
//! Read side of the three topic pools. Claims (the write side) live in
//! [`super::claims`].

use linc_core::{Pool, UserName};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use super::DbError;

/// Topic record from one of the pool tables
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Topic {
    pub id: i32,
    pub branch: String,
    pub topic: String,
    pub assigned_to: Option<String>,
}

/// Topic together with the pool it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeldTopic {
    pub pool: Pool,
    pub topic: Topic,
}

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Unassigned topics of `pool` that belong to one of `branches`.
    ///
    /// An empty branch list returns an empty result without querying.
    pub async fn list_unassigned(
        &self,
        pool: Pool,
        branches: &[String],
    ) -> Result<Vec<Topic>, DbError> {
        if branches.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT id, branch, topic, assigned_to FROM {} \
             WHERE branch = ANY($1) AND assigned_to IS NULL \
             ORDER BY id",
            pool.table()
        );

        let topics = sqlx::query_as::<_, Topic>(&sql)
            .bind(branches)
            .fetch_all(self.pool)
            .await?;

        Ok(topics)
    }

    /// Every topic assigned to `user`, across all pools.
    pub async fn held_by(&self, user: &UserName) -> Result<Vec<HeldTopic>, DbError> {
        let sql = Pool::ALL
            .iter()
            .map(|pool| {
                format!(
                    "SELECT '{table}' AS pool, id, branch, topic, assigned_to \
                     FROM {table} WHERE assigned_to = $1",
                    table = pool.table()
                )
            })
            .collect::<Vec<_>>()
            .join(" UNION ALL ");

        let rows = sqlx::query(&format!("{sql} ORDER BY pool, id"))
            .bind(user.as_str())
            .fetch_all(self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> Result<HeldTopic, DbError> {
                let tag: String = row.try_get("pool")?;
                let pool = Pool::from_table(&tag).ok_or(DbError::UnknownPool(tag))?;
                Ok(HeldTopic {
                    pool,
                    topic: Topic::from_row(&row)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn empty_branch_list_skips_the_query() {
        // lazy pool never connects; any query would fail with a connection error
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap();

        let topics = TopicRepo::new(&pool)
            .list_unassigned(Pool::Linguistics, &[])
            .await
            .unwrap();
        assert!(topics.is_empty());
    }
}
