//! linc-core: domain model for the project topic claiming service
//!
//! Students register a display name, pick an interest, browse branches and
//! claim up to [`TOPIC_QUOTA`] topics. This crate holds the validated input
//! types and the pure decision logic; storage and HTTP live in
//! `linc-server`.

pub mod claim;
pub mod config;
pub mod error;
pub mod interest;
pub mod sampling;
pub mod topic;
pub mod user;

pub use claim::{
    plan_claim, resolve_pool, ClaimDecision, ClaimPlan, PoolResolution, TopicState, TOPIC_QUOTA,
};
pub use config::{AppConfig, StoreConfig};
pub use error::{ConfigError, ValidationError};
pub use interest::{Interest, Pool};
pub use sampling::{pick_random_branches, MAX_RANDOM_BRANCHES, MIN_RANDOM_BRANCHES};
pub use topic::{TopicId, TopicSelection};
pub use user::UserName;
