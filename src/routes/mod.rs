//! HTTP route handlers.
//!
//! Each submodule defines routes for one page or resource:
//! - `index`: the username form (GET /)
//! - `fetch`: dashboard lookup (POST /fetch)
//! - `heatmap`: decodes and serves the heatmap PNG (GET /heatmap)
//! - `assets`: embedded stylesheet (GET /static/*)

pub mod assets;
pub mod fetch;
pub mod heatmap;
pub mod index;

use axum::Router;

use crate::github::SharedAggregator;

pub fn create_router(aggregator: SharedAggregator) -> Router {
    Router::new()
        .merge(index::routes())
        .merge(fetch::routes(aggregator))
        .merge(heatmap::routes())
        .merge(assets::routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::{MockGithub, MockReply};
    use crate::github::{Aggregator, GithubClient};
    use crate::heatmap::EncodedImage;
    use crate::views::NOT_FOUND_MESSAGE;
    use std::sync::Arc;

    struct TestServer {
        base: String,
        http: reqwest::Client,
    }

    async fn serve(mock: &MockGithub) -> TestServer {
        let client = GithubClient::new("test-token")
            .unwrap()
            .with_endpoint(mock.endpoint());
        let app = create_router(Arc::new(Aggregator::new(client)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base: format!("http://{}", addr),
            http: reqwest::Client::new(),
        }
    }

    fn heatmap_src(html: &str) -> &str {
        let start = html.find("/heatmap?heatmap_data=").unwrap();
        let end = start + html[start..].find('"').unwrap();
        &html[start..end]
    }

    #[tokio::test]
    async fn index_serves_form() {
        let mock = MockGithub::start().await;
        let server = serve(&mock).await;

        let response = server.http.get(format!("{}/", server.base)).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains("action=\"/fetch\""));
    }

    #[tokio::test]
    async fn fetch_then_heatmap_round_trip() {
        let mock = MockGithub::start().await;
        let server = serve(&mock).await;

        let response = server
            .http
            .post(format!("{}/fetch", server.base))
            .form(&[("username", "octocat")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains("The Octocat"));
        assert!(html.contains("Hello-World"));

        let src = heatmap_src(&html).to_string();
        let encoded = EncodedImage::from(src.trim_start_matches("/heatmap?heatmap_data=").to_string());

        let image = server
            .http
            .get(format!("{}{}", server.base, src))
            .send()
            .await
            .unwrap();
        assert_eq!(image.status(), 200);
        assert_eq!(image.headers()["content-type"], "image/png");
        let bytes = image.bytes().await.unwrap();
        assert_eq!(bytes.as_ref(), encoded.decode().unwrap().as_slice());
    }

    #[tokio::test]
    async fn forbidden_upstream_renders_error_form() {
        let mock = MockGithub::start().await;
        mock.reply("UserProfile", MockReply::status(403));
        let server = serve(&mock).await;

        let response = server
            .http
            .post(format!("{}/fetch", server.base))
            .form(&[("username", "octocat")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let html = response.text().await.unwrap();
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(!html.contains("/heatmap?"));
        assert!(!html.contains("The Octocat"));
    }

    #[tokio::test]
    async fn malformed_upstream_body_is_server_error() {
        let mock = MockGithub::start().await;
        mock.reply(
            "TopCommits",
            MockReply::json(serde_json::json!({ "data": { "user": { "repositories": 7 } } })),
        );
        let server = serve(&mock).await;

        let response = server
            .http
            .post(format!("{}/fetch", server.base))
            .form(&[("username", "octocat")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
    }

    #[tokio::test]
    async fn malformed_heatmap_data_is_bad_request() {
        let mock = MockGithub::start().await;
        let server = serve(&mock).await;

        let response = server
            .http
            .get(format!("{}/heatmap?heatmap_data=***", server.base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let missing = server
            .http
            .get(format!("{}/heatmap", server.base))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), 400);
    }

    #[tokio::test]
    async fn stylesheet_is_embedded() {
        let mock = MockGithub::start().await;
        let server = serve(&mock).await;

        let response = server
            .http
            .get(format!("{}/static/style.css", server.base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "text/css");

        let missing = server
            .http
            .get(format!("{}/static/nope.js", server.base))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), 404);
    }
}
