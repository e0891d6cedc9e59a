use crate::heatmap::{EncodedImage, HeatmapMatrix};
use crate::models::{CommitHistoryEntry, UserProfile};

/// Everything the result page shows for one username.
///
/// Only built when all three upstream queries succeeded.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: UserProfile,
    /// Up to ten repositories with their default-branch history.
    pub commit_history: Vec<CommitHistoryEntry>,
    /// Seven most recently updated repositories, two latest commits each.
    pub top_commits: Vec<CommitHistoryEntry>,
    pub matrix: HeatmapMatrix,
    pub heatmap: EncodedImage,
}
