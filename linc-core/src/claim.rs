//! Claim planning
//!
//! Pure decision logic for a claim request. The server locks the requested
//! rows, feeds their current state in here, and only writes what the plan
//! marks as available. Keeping this free of I/O lets the quota rules be
//! tested without a database.

use std::collections::{BTreeMap, BTreeSet};

use crate::{Pool, TopicId, TopicSelection, UserName};

/// Maximum number of topics one user may hold across all pools
pub const TOPIC_QUOTA: usize = 2;

/// Current state of one requested topic row, read under a row lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicState {
    pub id: TopicId,
    pub assigned_to: Option<String>,
}

/// Requested ids split by what can happen to them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimPlan {
    /// Unassigned, will be written
    pub available: Vec<TopicId>,
    /// Assigned to someone else
    pub taken: Vec<TopicId>,
    /// Already assigned to the claimant
    pub already_held: Vec<TopicId>,
    /// No such id in the pool
    pub missing: Vec<TopicId>,
}

/// Outcome of checking a request against the quota
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimDecision {
    Proceed(ClaimPlan),
    QuotaExceeded { held: usize, requested: usize },
}

/// Partition the requested ids and check the quota.
///
/// `held` is the number of topics the user already holds in every pool.
/// Only ids that are still unassigned count towards the new total, so a
/// topic somebody else grabbed first never uses up the claimant's quota.
pub fn plan_claim(
    user: &UserName,
    selection: &TopicSelection,
    rows: &[TopicState],
    held: usize,
) -> ClaimDecision {
    let by_id: BTreeMap<TopicId, &TopicState> = rows.iter().map(|row| (row.id, row)).collect();
    let mut plan = ClaimPlan::default();

    for id in selection.iter() {
        match by_id.get(&id).map(|row| row.assigned_to.as_deref()) {
            None => plan.missing.push(id),
            Some(None) => plan.available.push(id),
            Some(Some(owner)) if owner == user.as_str() => plan.already_held.push(id),
            Some(Some(_)) => plan.taken.push(id),
        }
    }

    if held + plan.available.len() > TOPIC_QUOTA {
        return ClaimDecision::QuotaExceeded {
            held,
            requested: plan.available.len(),
        };
    }

    ClaimDecision::Proceed(plan)
}

/// Where the ids of a claim request live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolResolution {
    /// Every id that exists anywhere exists in exactly this pool
    Single(Pool),
    /// Ids exist in more than one pool, so the request is ambiguous
    Mixed(Vec<Pool>),
    /// None of the ids exist in any pool
    Unknown,
}

/// Decide which pool a claim targets from `(pool, id)` lookup hits.
///
/// Topic ids are only unique inside a pool. A request whose ids show up in
/// more than one pool cannot be pinned to a pool and is reported as mixed
/// instead of guessing from the first id.
pub fn resolve_pool(hits: &[(Pool, TopicId)]) -> PoolResolution {
    let pools: BTreeSet<Pool> = hits.iter().map(|(pool, _)| *pool).collect();
    let mut pools = pools.into_iter();

    match (pools.next(), pools.len()) {
        (None, _) => PoolResolution::Unknown,
        (Some(pool), 0) => PoolResolution::Single(pool),
        (Some(first), _) => {
            let mut all = vec![first];
            all.extend(pools);
            PoolResolution::Mixed(all)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i32) -> TopicId {
        TopicId::new(n).unwrap()
    }

    fn user(name: &str) -> UserName {
        UserName::new(name).unwrap()
    }

    fn free(n: i32) -> TopicState {
        TopicState {
            id: id(n),
            assigned_to: None,
        }
    }

    fn owned(n: i32, by: &str) -> TopicState {
        TopicState {
            id: id(n),
            assigned_to: Some(by.to_string()),
        }
    }

    #[test]
    fn fresh_user_claims_two_free_topics() {
        let selection = TopicSelection::parse(["5,7"]).unwrap();
        let decision = plan_claim(&user("Alice"), &selection, &[free(5), free(7)], 0);

        let ClaimDecision::Proceed(plan) = decision else {
            panic!("expected claim to proceed");
        };
        assert_eq!(plan.available, vec![id(5), id(7)]);
        assert!(plan.taken.is_empty());
        assert!(plan.missing.is_empty());
    }

    #[test]
    fn full_quota_rejects_further_claims() {
        let selection = TopicSelection::parse(["3"]).unwrap();
        let decision = plan_claim(&user("Bob"), &selection, &[free(3)], 2);

        assert_eq!(
            decision,
            ClaimDecision::QuotaExceeded {
                held: 2,
                requested: 1
            }
        );
    }

    #[test]
    fn three_new_topics_exceed_quota() {
        let selection = TopicSelection::parse(["1,2,3"]).unwrap();
        let decision = plan_claim(&user("Cara"), &selection, &[free(1), free(2), free(3)], 0);
        assert!(matches!(decision, ClaimDecision::QuotaExceeded { held: 0, requested: 3 }));
    }

    #[test]
    fn taken_topics_do_not_count_against_quota() {
        // one held, one free and one grabbed by someone else: 1 + 1 <= 2
        let selection = TopicSelection::parse(["4,9"]).unwrap();
        let decision = plan_claim(&user("Dana"), &selection, &[free(4), owned(9, "Eve")], 1);

        let ClaimDecision::Proceed(plan) = decision else {
            panic!("expected claim to proceed");
        };
        assert_eq!(plan.available, vec![id(4)]);
        assert_eq!(plan.taken, vec![id(9)]);
    }

    #[test]
    fn own_topics_are_reported_separately() {
        let selection = TopicSelection::parse(["8"]).unwrap();
        let decision = plan_claim(&user("Finn"), &selection, &[owned(8, "Finn")], 1);

        let ClaimDecision::Proceed(plan) = decision else {
            panic!("expected claim to proceed");
        };
        assert!(plan.available.is_empty());
        assert_eq!(plan.already_held, vec![id(8)]);
    }

    #[test]
    fn unknown_ids_are_missing() {
        let selection = TopicSelection::parse(["5,404"]).unwrap();
        let decision = plan_claim(&user("Gus"), &selection, &[free(5)], 0);

        let ClaimDecision::Proceed(plan) = decision else {
            panic!("expected claim to proceed");
        };
        assert_eq!(plan.available, vec![id(5)]);
        assert_eq!(plan.missing, vec![id(404)]);
    }

    #[test]
    fn resolve_single_pool() {
        let hits = [(Pool::Linguistics, id(1)), (Pool::Linguistics, id(2))];
        assert_eq!(resolve_pool(&hits), PoolResolution::Single(Pool::Linguistics));
    }

    #[test]
    fn resolve_mixed_pools() {
        let hits = [(Pool::Integrated, id(1)), (Pool::Linguistics, id(1))];
        assert_eq!(
            resolve_pool(&hits),
            PoolResolution::Mixed(vec![Pool::Linguistics, Pool::Integrated])
        );
    }

    #[test]
    fn resolve_nothing() {
        assert_eq!(resolve_pool(&[]), PoolResolution::Unknown);
    }
}
