use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::github::queries::QueryDocument;

pub const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a V,
}

/// GitHub GraphQL client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    token: Arc<str>,
    endpoint: Arc<str>,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-profile-viewer/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AppError::Http)?;

        Ok(Self {
            http,
            token: Arc::from(token.into()),
            endpoint: Arc::from(GRAPHQL_ENDPOINT),
        })
    }

    /// Send requests to `endpoint` instead of api.github.com.
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Arc::from(endpoint.into());
        self
    }

    /// POST one query document with its variables.
    ///
    /// Only a 200 response counts as success; its body is returned as parsed
    /// JSON. Any other status becomes `UpstreamStatus` without reading the
    /// body. No retries.
    pub async fn execute<V: Serialize>(&self, document: &QueryDocument, variables: &V) -> Result<Value> {
        let payload = GraphqlRequest {
            query: document.text,
            operation_name: document.operation_name,
            variables,
        };

        let response = self
            .http
            .post(&*self.endpoint)
            .bearer_auth(&*self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                "GraphQL {} returned HTTP {}",
                document.operation_name,
                status.as_u16()
            );
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if let Some(errors) = body.get("errors") {
            tracing::warn!("GraphQL {} reported errors: {}", document.operation_name, errors);
        }
        tracing::debug!("GraphQL {} ok ({} bytes)", document.operation_name, bytes.len());

        Ok(body)
    }
}
