//! Server-rendered HTML pages
//!
//! Each page is a plain function from the data a route produced to an
//! `Html<String>`. All user-controlled text goes through [`escape`].

mod pages;

pub use pages::{
    branches_page, claim_page, error_page, index_page, not_found_page, selection_page,
    topics_page, ClaimView,
};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} · LINC Project Topics</title>
    <link rel="icon" href="/favicon.svg" type="image/svg+xml">
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Hidden input carrying a value to the next step.
fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        escape(name),
        escape(value)
    )
}
