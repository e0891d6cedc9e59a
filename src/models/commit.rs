use chrono::{DateTime, FixedOffset};

/// Commits of one repository's default branch, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitHistoryEntry {
    pub repository: String,
    pub commits: Vec<CommitEntry>,
}

impl CommitHistoryEntry {
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommitEntry {
    pub message: String,
    pub author: AuthorInfo,
}

impl CommitEntry {
    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    pub date: Option<DateTime<FixedOffset>>,
}
