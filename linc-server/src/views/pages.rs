use axum::http::StatusCode;
use axum::response::Html;
use linc_core::{Interest, UserName, TOPIC_QUOTA};

use super::{escape, hidden, layout};
use crate::db::Topic;

/// Data for the claim result page
#[derive(Debug, Clone, Default)]
pub struct ClaimView {
    pub message: String,
    pub claimed: Vec<Topic>,
    /// Extra lines under the message (taken ids, missing ids, held topics)
    pub notes: Vec<String>,
}

/// GET / - name entry, optionally with a message from a failed attempt
pub fn index_page(message: Option<&str>) -> Html<String> {
    let notice = message
        .map(|m| format!(r#"        <p class="notice">{}</p>"#, escape(m)))
        .unwrap_or_default();

    let body = format!(
        r#"        <h1>LINC Project Topics</h1>
        <p>Enter your full name to start choosing a project topic. You can claim up to {TOPIC_QUOTA} topics.</p>
{notice}
        <form method="post" action="/name">
            <label for="name">Your name</label>
            <input id="name" name="name" type="text" maxlength="{max}" required autofocus>
            <button type="submit">Continue</button>
        </form>"#,
        max = linc_core::user::MAX_USER_NAME_LEN,
    );
    Html(layout("Welcome", &body))
}

/// Interest selection after a successful registration
pub fn selection_page(name: &UserName) -> Html<String> {
    let options: String = Interest::ALL
        .iter()
        .map(|interest| {
            format!(
                r#"            <label><input type="radio" name="interest" value="{value}" required> {label}</label>
"#,
                value = interest.as_str(),
                label = escape(interest.label()),
            )
        })
        .collect();

    let body = format!(
        r#"        <h1>Welcome, {name}</h1>
        <p>Which area are you most interested in?</p>
        <form method="post" action="/branches">
            {hidden_name}
{options}            <button type="submit">Show branches</button>
            <button type="submit" formaction="/generate-random">Surprise me</button>
        </form>"#,
        name = escape(name.as_str()),
        hidden_name = hidden("name", name.as_str()),
    );
    Html(layout("Choose an interest", &body))
}

/// Branch checklist for one interest
pub fn branches_page(name: &UserName, interest: Interest, branches: &[String]) -> Html<String> {
    let list = if branches.is_empty() {
        r#"            <p class="notice">No branches are available for this area yet.</p>
"#
        .to_string()
    } else {
        branches
            .iter()
            .map(|branch| {
                format!(
                    r#"            <label><input type="checkbox" name="branches" value="{value}"> {value}</label>
"#,
                    value = escape(branch)
                )
            })
            .collect()
    };

    let body = format!(
        r#"        <h1>{label} branches</h1>
        <p>Pick the branches you would like to see topics for.</p>
        <form method="post" action="/generate">
            {hidden_name}
            {hidden_interest}
{list}            <button type="submit" name="action" value="generate">Show topics</button>
            <button type="submit" formaction="/generate-random">Pick branches for me</button>
        </form>"#,
        label = escape(interest.label()),
        hidden_name = hidden("name", name.as_str()),
        hidden_interest = hidden("interest", interest.as_str()),
    );
    Html(layout("Choose branches", &body))
}

/// Unassigned topics for the selected branches, with a claim form
pub fn topics_page(
    name: &UserName,
    interest: Interest,
    branches: &[String],
    topics: &[Topic],
) -> Html<String> {
    let shown = if branches.is_empty() {
        "none".to_string()
    } else {
        branches.iter().map(|b| escape(b)).collect::<Vec<_>>().join(", ")
    };

    let list = if topics.is_empty() {
        r#"            <p class="notice">No unclaimed topics left in these branches.</p>
"#
        .to_string()
    } else {
        topics
            .iter()
            .map(|topic| {
                format!(
                    r#"            <label><input type="checkbox" name="topics" value="{id}"> <span class="branch">{branch}</span> {text}</label>
"#,
                    id = topic.id,
                    branch = escape(&topic.branch),
                    text = escape(&topic.topic),
                )
            })
            .collect()
    };

    let body = format!(
        r#"        <h1>Available topics</h1>
        <p>Branches: {shown}</p>
        <form method="get" action="/claim">
            {hidden_name}
            {hidden_interest}
{list}            <button type="submit">Claim selected topics</button>
        </form>"#,
        hidden_name = hidden("name", name.as_str()),
        hidden_interest = hidden("interest", interest.as_str()),
    );
    Html(layout("Topics", &body))
}

/// Result of a claim request
pub fn claim_page(view: &ClaimView) -> Html<String> {
    let claimed = if view.claimed.is_empty() {
        String::new()
    } else {
        let items: String = view
            .claimed
            .iter()
            .map(|topic| format!("            <li>{}</li>\n", escape(&topic.topic)))
            .collect();
        format!("        <ul class=\"claimed\">\n{items}        </ul>\n")
    };

    let notes: String = view
        .notes
        .iter()
        .map(|note| format!("        <p class=\"note\">{}</p>\n", escape(note)))
        .collect();

    let body = format!(
        r#"        <h1>{message}</h1>
{claimed}{notes}        <p><a href="/">Back to start</a></p>"#,
        message = escape(&view.message),
    );
    Html(layout("Claim result", &body))
}

/// Error page for validation failures and internal errors
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        r#"        <h1>{code} {reason}</h1>
        <p>{message}</p>
        <p><a href="/">Back to start</a></p>"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape(message),
    );
    Html(layout("Error", &body))
}

pub fn not_found_page() -> Html<String> {
    error_page(StatusCode::NOT_FOUND, "Page not found")
}
