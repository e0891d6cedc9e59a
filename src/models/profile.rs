use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub login: String,
    pub bio: Option<String>,
    /// Empty when the user keeps their email private.
    pub email: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    /// Most recently updated repositories, at most seven.
    pub repositories: Vec<RepoSummary>,
}

impl UserProfile {
    /// Display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
}
