//! Branch browsing and topic listing

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
    routing::post,
    Router,
};
use linc_core::{Interest, UserName};

use crate::db::{BranchRepo, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::FormFields;
use crate::http::server::AppState;
use crate::views;

/// Name and interest, carried by every form after registration
fn visitor(form: &FormFields) -> Result<(UserName, Interest), ApiError> {
    let name = UserName::new(form.require("name")?)?;
    let interest = form.require("interest")?.parse::<Interest>()?;
    Ok((name, interest))
}

/// POST /branches - branch checklist for the chosen interest
async fn branches(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, ApiError> {
    let (name, interest) = visitor(&form)?;
    let branches = BranchRepo::new(&state.pool).list(interest).await?;

    Ok(views::branches_page(&name, interest, &branches))
}

/// POST /generate - unassigned topics for the checked branches
async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, ApiError> {
    let (name, interest) = visitor(&form)?;
    let branches: Vec<String> = form
        .all("branches")
        .into_iter()
        .map(str::trim)
        .filter(|branch| !branch.is_empty())
        .map(str::to_owned)
        .collect();

    tracing::debug!(
        user = %name,
        interest = %interest,
        action = form.get("action").unwrap_or("generate"),
        branches = branches.len(),
        "listing topics"
    );

    let topics = TopicRepo::new(&state.pool)
        .list_unassigned(interest.pool(), &branches)
        .await?;

    Ok(views::topics_page(&name, interest, &branches, &topics))
}

/// POST /generate-random - topics for a random subset of branches
async fn generate_random(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, ApiError> {
    let (name, interest) = visitor(&form)?;
    let branches = BranchRepo::new(&state.pool).random(interest).await?;

    let topics = TopicRepo::new(&state.pool)
        .list_unassigned(interest.pool(), &branches)
        .await?;

    Ok(views::topics_page(&name, interest, &branches, &topics))
}

/// Catalog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/branches", post(branches))
        .route("/generate", post(generate))
        .route("/generate-random", post(generate_random))
}
