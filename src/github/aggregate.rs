//! Merges the three GraphQL queries into one `Dashboard`.
//!
//! All three queries must come back with HTTP 200 before anything is built.
//! The first failure wins and nothing partial escapes.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::github::client::GithubClient;
use crate::github::queries::{LoginVariables, COMMIT_HISTORY, TOP_COMMITS, USER_PROFILE};
use crate::github::response::{HistoryResponse, ProfileResponse};
use crate::heatmap;
use crate::models::{CommitHistoryEntry, Dashboard, UserProfile};

/// Longer image strings may not fit in a request URI.
const URL_IMAGE_BUDGET: usize = 60_000;

pub struct Aggregator {
    client: GithubClient,
}

pub type SharedAggregator = Arc<Aggregator>;

impl Aggregator {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    pub async fn fetch_dashboard(&self, login: &str) -> Result<Dashboard> {
        let login = login.trim();
        if login.is_empty() {
            return Err(AppError::UserNotFound(String::new()));
        }

        let start = Instant::now();
        let variables = LoginVariables { login };

        let (profile, history, top) = tokio::try_join!(
            self.client.execute(&USER_PROFILE, &variables),
            self.client.execute(&COMMIT_HISTORY, &variables),
            self.client.execute(&TOP_COMMITS, &variables),
        )?;
        tracing::debug!("Fetched GraphQL data for {} in {:?}", login, start.elapsed());

        let profile: ProfileResponse = serde_json::from_value(profile)?;
        let profile = profile
            .data
            .and_then(|data| data.user)
            .map(UserProfile::from)
            .ok_or_else(|| AppError::UserNotFound(login.to_string()))?;
        let commit_history = history_entries(history, login)?;
        let top_commits = history_entries(top, login)?;

        let render_input = commit_history.clone();
        let (matrix, heatmap) = tokio::task::spawn_blocking(move || heatmap::generate(&render_input))
            .await
            .map_err(|e| AppError::Internal(format!("Heatmap task failed: {}", e)))??;

        if heatmap.len() > URL_IMAGE_BUDGET {
            tracing::warn!(
                "Heatmap for {} encodes to {} characters; the image URL may be rejected",
                login,
                heatmap.len()
            );
        }

        tracing::info!(
            "Dashboard for {} built in {:?}: {} repos, {} history repos",
            login,
            start.elapsed(),
            profile.repositories.len(),
            commit_history.len()
        );

        Ok(Dashboard {
            profile,
            commit_history,
            top_commits,
            matrix,
            heatmap,
        })
    }
}

fn history_entries(body: Value, login: &str) -> Result<Vec<CommitHistoryEntry>> {
    let parsed: HistoryResponse = serde_json::from_value(body)?;
    let user = parsed
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| AppError::UserNotFound(login.to_string()))?;

    Ok(user
        .repositories
        .into_nodes()
        .map(CommitHistoryEntry::from)
        .collect())
}
