//! GraphQL documents sent to GitHub.
//!
//! Each document takes the username as the `$login` variable; the login is
//! never spliced into the query text.

use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct QueryDocument {
    pub operation_name: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginVariables<'a> {
    pub login: &'a str,
}

/// Profile fields plus the seven most recently updated repositories.
pub const USER_PROFILE: QueryDocument = QueryDocument {
    operation_name: "UserProfile",
    text: r#"
query UserProfile($login: String!) {
  user(login: $login) {
    name
    login
    bio
    email
    avatarUrl
    createdAt
    repositories(first: 7, orderBy: {field: UPDATED_AT, direction: DESC}) {
      nodes {
        name
        description
      }
    }
  }
}
"#,
};

/// Ten repositories with their default-branch history, feeding the heatmap.
pub const COMMIT_HISTORY: QueryDocument = QueryDocument {
    operation_name: "CommitHistory",
    text: r#"
query CommitHistory($login: String!) {
  user(login: $login) {
    repositories(first: 10) {
      nodes {
        name
        defaultBranchRef {
          target {
            ... on Commit {
              history {
                nodes {
                  message
                  author {
                    name
                    email
                    date
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#,
};

/// The two latest commits of the seven most recently updated repositories.
pub const TOP_COMMITS: QueryDocument = QueryDocument {
    operation_name: "TopCommits",
    text: r#"
query TopCommits($login: String!) {
  user(login: $login) {
    repositories(first: 7, orderBy: {field: UPDATED_AT, direction: DESC}) {
      nodes {
        name
        defaultBranchRef {
          target {
            ... on Commit {
              history(first: 2) {
                nodes {
                  message
                  author {
                    name
                    email
                    date
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#,
};
