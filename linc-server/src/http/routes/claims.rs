//! Topic claims

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use linc_core::{Interest, Pool, TopicId, TopicSelection, UserName, ValidationError, TOPIC_QUOTA};

use crate::db::{ClaimOutcome, ClaimRepo, ClaimReport, TopicRepo};
use crate::http::error::ApiError;
use crate::http::extractors::FormFields;
use crate::http::server::AppState;
use crate::views::{self, ClaimView};

/// GET /claim?name=..&topics=5,7[&interest=..]
async fn claim(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FormFields>,
) -> Result<Html<String>, ApiError> {
    let name = UserName::new(query.require("name")?)?;

    let selection = match TopicSelection::parse(query.all("topics")) {
        Ok(selection) => selection,
        Err(ValidationError::Empty { .. }) => {
            return Ok(views::claim_page(&ClaimView {
                message: "No topics selected for claiming.".into(),
                ..ClaimView::default()
            }));
        }
        Err(e) => return Err(e.into()),
    };

    let interest = query
        .get("interest")
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<Interest>)
        .transpose()?;

    let outcome = ClaimRepo::new(&state.pool)
        .claim(&name, &selection, interest)
        .await?;

    let view = match outcome {
        ClaimOutcome::Completed(report) => completed_view(report),
        ClaimOutcome::QuotaExceeded { .. } => {
            let held = TopicRepo::new(&state.pool).held_by(&name).await?;
            ClaimView {
                message: "You have already claimed the maximum number of topics.".into(),
                claimed: Vec::new(),
                notes: held
                    .into_iter()
                    .map(|held| format!("You hold: {}", held.topic.topic))
                    .chain(std::iter::once(format!(
                        "Each student may hold at most {TOPIC_QUOTA} topics."
                    )))
                    .collect(),
            }
        }
        ClaimOutcome::MixedPools(pools) => mixed_pools_view(&pools),
        ClaimOutcome::UnknownUser => ClaimView {
            message: "Please register your name before claiming topics.".into(),
            ..ClaimView::default()
        },
    };

    Ok(views::claim_page(&view))
}

/// Turn a committed claim into the result message and notes.
fn completed_view(report: ClaimReport) -> ClaimView {
    let message = if report.claimed.is_empty() {
        "None of the selected topics could be claimed."
    } else {
        "Topics claimed successfully!"
    };

    let mut notes = Vec::new();
    if !report.taken.is_empty() {
        notes.push(format!(
            "Already claimed by someone else: {}.",
            id_list(&report.taken)
        ));
    }
    if !report.already_held.is_empty() {
        notes.push(format!("Already yours: {}.", id_list(&report.already_held)));
    }
    if !report.missing.is_empty() {
        notes.push(format!("No such topic: {}.", id_list(&report.missing)));
    }

    ClaimView {
        message: message.into(),
        claimed: report.claimed,
        notes,
    }
}

/// Ids matched topics in several pools. Each pool numbers from 1, so this
/// is usually a hand-written link without `interest`.
fn mixed_pools_view(pools: &[Pool]) -> ClaimView {
    let areas = pools
        .iter()
        .map(|pool| pool.interest().label())
        .collect::<Vec<_>>()
        .join(", ");

    ClaimView {
        message: "Selected topics must all come from the same interest area.".into(),
        claimed: Vec::new(),
        notes: vec![
            format!("Those topic numbers exist in more than one area: {areas}."),
            "Please go back to the topic listing and claim from there, so your choice is tied to one interest.".into(),
        ],
    }
}

fn id_list(ids: &[TopicId]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Claim routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/claim", get(claim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Topic;

    fn id(n: i32) -> TopicId {
        TopicId::new(n).unwrap()
    }

    #[test]
    fn full_success_has_no_notes() {
        let view = completed_view(ClaimReport {
            claimed: vec![
                Topic {
                    id: 5,
                    branch: "Syntax".into(),
                    topic: "Word order".into(),
                    assigned_to: Some("Alice".into()),
                },
                Topic {
                    id: 7,
                    branch: "Syntax".into(),
                    topic: "Clitics".into(),
                    assigned_to: Some("Alice".into()),
                },
            ],
            ..ClaimReport::default()
        });

        assert_eq!(view.message, "Topics claimed successfully!");
        assert_eq!(view.claimed.len(), 2);
        assert!(view.notes.is_empty());
    }

    #[test]
    fn lost_race_is_reported() {
        let view = completed_view(ClaimReport {
            taken: vec![id(9)],
            ..ClaimReport::default()
        });

        assert_eq!(view.message, "None of the selected topics could be claimed.");
        assert_eq!(view.notes, vec!["Already claimed by someone else: #9.".to_string()]);
    }

    #[test]
    fn mixed_pools_point_back_to_the_listing() {
        let view = mixed_pools_view(&[Pool::Linguistics, Pool::Integrated]);

        assert_eq!(view.message, "Selected topics must all come from the same interest area.");
        assert!(view.claimed.is_empty());
        assert!(view.notes[0].contains("Linguistics, Linguistics & Communication"));
        assert!(view.notes[1].contains("topic listing"));
    }

    #[test]
    fn missing_and_held_ids_are_listed() {
        let view = completed_view(ClaimReport {
            already_held: vec![id(3)],
            missing: vec![id(404), id(405)],
            ..ClaimReport::default()
        });

        assert!(view.notes.contains(&"Already yours: #3.".to_string()));
        assert!(view.notes.contains(&"No such topic: #404, #405.".to_string()));
    }
}
