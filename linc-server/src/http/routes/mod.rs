//! Route handlers organized by step of the claim flow

pub mod catalog;
pub mod claims;
pub mod health;
pub mod registration;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::views;

/// Fallback for any path that is neither a route nor a static asset
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, views::not_found_page())
}
