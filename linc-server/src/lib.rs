//! linc-server: HTTP server for project topic claims
//!
//! Serves the registration → interest → branches → topics → claim flow as
//! server-rendered HTML over a Postgres topic store.

pub mod db;
pub mod http;
pub mod views;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
