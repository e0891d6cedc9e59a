//! Server-side HTML for the two pages.
//!
//! - `index_page`: the username form, optionally with an error message
//! - `dashboard_page`: profile, repositories, commit lists and the heatmap

pub mod format;

use std::fmt::Write;

use chrono::Utc;

use crate::heatmap::HeatmapMatrix;
use crate::models::{CommitHistoryEntry, Dashboard};
use self::format::{escape_html, joined_ago};

pub const NOT_FOUND_MESSAGE: &str = "User not found. Please check the GitHub username.";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

pub fn index_page(error_message: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"search\">\n<h1>GitHub Profile Viewer</h1>\n");
    body.push_str(
        "<form method=\"post\" action=\"/fetch\">\n  \
         <input type=\"text\" name=\"username\" placeholder=\"GitHub username\" required autofocus>\n  \
         <button type=\"submit\">Fetch</button>\n</form>\n",
    );
    if let Some(message) = error_message {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(message));
    }
    body.push_str("</main>");
    layout("GitHub Profile Viewer", &body)
}

pub fn dashboard_page(dashboard: &Dashboard) -> String {
    let profile = &dashboard.profile;
    let mut body = String::new();

    body.push_str("<main class=\"dashboard\">\n<section class=\"profile\">\n");
    let _ = writeln!(
        body,
        "<img class=\"avatar\" src=\"{}\" alt=\"{}\">",
        escape_html(&profile.avatar_url),
        escape_html(&profile.login)
    );
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(profile.display_name()));
    let _ = writeln!(body, "<p class=\"login\">@{}</p>", escape_html(&profile.login));
    if let Some(bio) = &profile.bio {
        let _ = writeln!(body, "<p class=\"bio\">{}</p>", escape_html(bio));
    }
    if !profile.email.is_empty() {
        let _ = writeln!(
            body,
            "<p class=\"email\"><a href=\"mailto:{0}\">{0}</a></p>",
            escape_html(&profile.email)
        );
    }
    let _ = writeln!(
        body,
        "<p class=\"joined\">Joined {} ({})</p>",
        profile.created_at.format("%B %-d, %Y"),
        joined_ago(profile.created_at.date_naive(), Utc::now().date_naive())
    );
    body.push_str("</section>\n");

    body.push_str("<section class=\"repositories\">\n<h2>Recently updated repositories</h2>\n<ul>\n");
    for repo in &profile.repositories {
        let _ = write!(body, "<li><strong>{}</strong>", escape_html(&repo.name));
        if let Some(description) = &repo.description {
            let _ = write!(body, " <span>{}</span>", escape_html(description));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section class=\"heatmap\">\n<h2>Commit activity</h2>\n");
    let _ = writeln!(
        body,
        "<img src=\"/heatmap?heatmap_data={}\" alt=\"Commit History Heatmap\">",
        dashboard.heatmap
    );
    push_heatmap_summary(&mut body, &dashboard.matrix);
    body.push_str("</section>\n");

    body.push_str("<section class=\"top-commits\">\n<h2>Latest commits</h2>\n");
    push_commit_lists(&mut body, &dashboard.top_commits);
    body.push_str("</section>\n");

    body.push_str("<section class=\"history\">\n<h2>Commit history</h2>\n");
    push_commit_lists(&mut body, &dashboard.commit_history);
    body.push_str("</section>\n");

    body.push_str("<p><a href=\"/\">Look up another user</a></p>\n</main>");

    layout(&format!("{} on GitHub", profile.login), &body)
}

/// Per-repository counts behind the heatmap cells, in column order.
fn push_heatmap_summary(body: &mut String, matrix: &HeatmapMatrix) {
    if matrix.is_empty() {
        body.push_str("<p class=\"heatmap-summary\">No repositories with commit history.</p>\n");
        return;
    }
    body.push_str("<ul class=\"heatmap-summary\">\n");
    for (column, label) in matrix.labels().iter().enumerate() {
        let count = matrix.cell(column).unwrap_or(0);
        let _ = writeln!(
            body,
            "<li>{}: {} commit{}</li>",
            escape_html(label),
            count,
            if count == 1 { "" } else { "s" }
        );
    }
    body.push_str("</ul>\n");
}

fn push_commit_lists(body: &mut String, entries: &[CommitHistoryEntry]) {
    for entry in entries {
        let _ = writeln!(
            body,
            "<details>\n<summary>{} ({} commit{})</summary>\n<ul>",
            escape_html(&entry.repository),
            entry.commit_count(),
            if entry.commit_count() == 1 { "" } else { "s" }
        );
        for commit in &entry.commits {
            let _ = write!(
                body,
                "<li><code>{}</code> by {}",
                escape_html(commit.summary()),
                escape_html(&commit.author.name)
            );
            if !commit.author.email.is_empty() {
                let _ = write!(body, " &lt;{}&gt;", escape_html(&commit.author.email));
            }
            if let Some(date) = &commit.author.date {
                let _ = write!(body, " <time>{}</time>", date.format("%Y-%m-%d %H:%M"));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n</details>\n");
    }
}
