//! Name entry and registration

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use linc_core::UserName;

use crate::db::{RegistrationOutcome, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::FormFields;
use crate::http::server::AppState;
use crate::views;

const NAME_TAKEN: &str = "This name is already taken. Please choose a different one.";
const HAS_TOPICS: &str = "This name already has a topic assigned. Please choose a different one.";

/// GET / - registration page
async fn index() -> Html<String> {
    views::index_page(None)
}

/// POST /name - register a name, then show interest selection
async fn register(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormFields>,
) -> Result<Response, ApiError> {
    let name = match UserName::new(form.get("name").unwrap_or_default()) {
        Ok(name) => name,
        Err(e) => {
            let message = format!("Please enter a valid name ({e}).");
            return Ok((StatusCode::BAD_REQUEST, views::index_page(Some(&message))).into_response());
        }
    };

    let page = match UserRepo::new(&state.pool).register(&name).await? {
        RegistrationOutcome::Registered => views::selection_page(&name),
        RegistrationOutcome::NameTaken => views::index_page(Some(NAME_TAKEN)),
        RegistrationOutcome::HasTopics => views::index_page(Some(HAS_TOPICS)),
    };

    Ok(page.into_response())
}

/// Registration routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/name", post(register))
}
