//! Wire shapes of the GraphQL responses.
//!
//! Every nested value GitHub may return as `null` is an `Option` here, so a
//! repository without a default branch or history decodes fine and becomes
//! a zero-commit entry instead of an error.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::models::{AuthorInfo, CommitEntry, CommitHistoryEntry, RepoSummary, UserProfile};

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct UserData<U> {
    pub user: Option<U>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    pub nodes: Option<Vec<Option<N>>>,
}

impl<N> Connection<N> {
    /// Non-null nodes in response order.
    pub fn into_nodes(self) -> impl Iterator<Item = N> {
        self.nodes.unwrap_or_default().into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileNode {
    pub name: Option<String>,
    pub login: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub repositories: Connection<RepoSummaryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepoSummaryNode {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoriesNode<R> {
    pub repositories: Connection<R>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRepoNode {
    pub name: String,
    pub default_branch_ref: Option<RefNode>,
}

#[derive(Debug, Deserialize)]
pub struct RefNode {
    pub target: Option<TargetNode>,
}

/// Only `Commit` targets carry `history`; other object types decode with
/// `history: None`.
#[derive(Debug, Deserialize)]
pub struct TargetNode {
    pub history: Option<Connection<CommitNode>>,
}

#[derive(Debug, Deserialize)]
pub struct CommitNode {
    #[serde(default)]
    pub message: String,
    pub author: Option<AuthorNode>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorNode {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
}

pub type ProfileResponse = GraphqlResponse<UserData<ProfileNode>>;
pub type HistoryResponse = GraphqlResponse<UserData<RepositoriesNode<HistoryRepoNode>>>;

impl From<ProfileNode> for UserProfile {
    fn from(node: ProfileNode) -> Self {
        UserProfile {
            name: node.name,
            login: node.login,
            bio: node.bio.filter(|bio| !bio.trim().is_empty()),
            email: node.email.unwrap_or_default(),
            avatar_url: node.avatar_url,
            created_at: node.created_at,
            repositories: node
                .repositories
                .into_nodes()
                .map(|repo| RepoSummary {
                    name: repo.name,
                    description: repo.description,
                })
                .collect(),
        }
    }
}

impl From<HistoryRepoNode> for CommitHistoryEntry {
    fn from(node: HistoryRepoNode) -> Self {
        let commits = node
            .default_branch_ref
            .and_then(|branch| branch.target)
            .and_then(|target| target.history)
            .map(|history| history.into_nodes().map(CommitEntry::from).collect())
            .unwrap_or_default();

        CommitHistoryEntry {
            repository: node.name,
            commits,
        }
    }
}

impl From<CommitNode> for CommitEntry {
    fn from(node: CommitNode) -> Self {
        let (name, email, date) = match node.author {
            Some(author) => (author.name, author.email, author.date),
            None => (None, None, None),
        };
        CommitEntry {
            message: node.message.trim().to_string(),
            author: AuthorInfo {
                name: name.unwrap_or_else(|| "Unknown".to_string()),
                email: email.unwrap_or_default(),
                date,
            },
        }
    }
}
