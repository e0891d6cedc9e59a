//! Dashboard lookup.
//!
//! POST /fetch (form field `username`)
//!
//! Runs the three GitHub queries and renders the dashboard page. Any
//! upstream failure or unknown user re-renders the form with the fixed
//! "user not found" message; the real cause only goes to the log.

use axum::{
    extract::{Form, State},
    response::Html,
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::github::SharedAggregator;
use crate::views::{self, NOT_FOUND_MESSAGE};

pub fn routes(aggregator: SharedAggregator) -> Router {
    Router::new()
        .route("/fetch", post(fetch_dashboard))
        .with_state(aggregator)
}

#[derive(Debug, Deserialize)]
struct FetchForm {
    #[serde(default)]
    username: String,
}

async fn fetch_dashboard(
    State(aggregator): State<SharedAggregator>,
    Form(form): Form<FetchForm>,
) -> Result<Html<String>> {
    match aggregator.fetch_dashboard(&form.username).await {
        Ok(dashboard) => Ok(Html(views::dashboard_page(&dashboard))),
        Err(e) if e.is_lookup_failure() => {
            tracing::warn!("Lookup of {:?} failed: {}", form.username, e);
            Ok(Html(views::index_page(Some(NOT_FOUND_MESSAGE))))
        }
        Err(e) => Err(e),
    }
}
