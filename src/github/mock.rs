//! In-process stand-in for the GitHub GraphQL endpoint, used by tests.
//!
//! Replies are keyed by `operationName`. By default every operation answers
//! with the octocat fixtures below.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct MockReply {
    status: StatusCode,
    body: Value,
}

impl MockReply {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            body: json!({ "message": "mock failure" }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub operation_name: String,
    pub query: String,
    pub variables: Value,
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<String, MockReply>>,
    seen: Mutex<Vec<SeenRequest>>,
}

pub struct MockGithub {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockGithub {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        {
            let mut replies = state.replies.lock().unwrap();
            replies.insert("UserProfile".into(), MockReply::json(octocat_profile()));
            replies.insert("CommitHistory".into(), MockReply::json(octocat_history(3)));
            replies.insert("TopCommits".into(), MockReply::json(octocat_history(2)));
        }

        let app = Router::new()
            .route("/graphql", post(graphql))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }

    pub fn reply(&self, operation_name: &str, reply: MockReply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(operation_name.to_string(), reply);
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }
}

async fn graphql(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let operation_name = body["operationName"].as_str().unwrap_or_default().to_string();

    state.seen.lock().unwrap().push(SeenRequest {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        operation_name: operation_name.clone(),
        query: body["query"].as_str().unwrap_or_default().to_string(),
        variables: body["variables"].clone(),
    });

    let reply = state.replies.lock().unwrap().get(&operation_name).cloned();
    match reply {
        Some(reply) => (reply.status, Json(reply.body)).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

pub fn octocat_profile() -> Value {
    json!({
        "data": { "user": {
            "name": "The Octocat",
            "login": "octocat",
            "bio": null,
            "email": "",
            "avatarUrl": "https://avatars.githubusercontent.com/u/583231?v=4",
            "createdAt": "2011-01-25T18:44:36Z",
            "repositories": { "nodes": [
                { "name": "Hello-World", "description": "My first repository on GitHub!" }
            ]}
        }}
    })
}

/// One repository, "Hello-World", with `commits` history nodes.
pub fn octocat_history(commits: usize) -> Value {
    let nodes: Vec<Value> = (0..commits)
        .map(|i| {
            json!({
                "message": format!("Commit number {i}"),
                "author": {
                    "name": "The Octocat",
                    "email": "octocat@github.com",
                    "date": "2012-03-06T15:06:50-08:00"
                }
            })
        })
        .collect();

    json!({
        "data": { "user": { "repositories": { "nodes": [
            { "name": "Hello-World", "defaultBranchRef": { "target": { "history": { "nodes": nodes } } } }
        ]}}}
    })
}

pub fn empty_history() -> Value {
    json!({ "data": { "user": { "repositories": { "nodes": [] } } } })
}

pub fn unknown_user() -> Value {
    json!({
        "data": { "user": null },
        "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a User with the login of 'ghost'." }]
    })
}
