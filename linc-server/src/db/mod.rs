//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`, passed explicitly to each repository
//! - Table names come from [`linc_core::Pool`], never from request input
//! - Rely on DB constraints, handle conflicts - no bare check-then-insert
//! - Transactions for multi-step operations (registration, claims)

pub mod pool;
pub mod repos;

pub use pool::{connect_options, create_pool, create_pool_from_url};
pub use repos::*;
