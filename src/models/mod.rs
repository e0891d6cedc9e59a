//! View-model types handed to the presentation layer.
//!
//! - `profile`: UserProfile, RepoSummary (profile query)
//! - `commit`: CommitHistoryEntry, CommitEntry, AuthorInfo (history queries)
//! - `dashboard`: Dashboard, the merged per-request view model

pub mod commit;
pub mod dashboard;
pub mod profile;

pub use commit::*;
pub use dashboard::*;
pub use profile::*;
