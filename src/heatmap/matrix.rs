use crate::models::CommitHistoryEntry;

/// A 1×N matrix of commit counts, one column per repository.
///
/// Column order follows the order the history query returned the
/// repositories in. Counts are never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapMatrix {
    labels: Vec<String>,
    counts: Vec<u64>,
}

impl HeatmapMatrix {
    pub fn from_history(history: &[CommitHistoryEntry]) -> Self {
        let labels = history.iter().map(|entry| entry.repository.clone()).collect();
        let counts = history
            .iter()
            .map(|entry| entry.commit_count() as u64)
            .collect();
        Self { labels, counts }
    }

    #[cfg(test)]
    pub fn rows(&self) -> usize {
        1
    }

    pub fn columns(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Cell value for column `column` of the single row.
    pub fn cell(&self, column: usize) -> Option<u64> {
        self.counts.get(column).copied()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Matrix in row-major form, i.e. `[[c0, c1, ...]]`.
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        vec![self.counts.clone()]
    }

    /// X tick labels: the repository names.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Text drawn inside each cell.
    pub fn annotations(&self) -> Vec<String> {
        self.counts.iter().map(|count| count.to_string()).collect()
    }

    /// Value range used to normalise colours, `(0, 0)` for an empty matrix.
    pub fn value_range(&self) -> (u64, u64) {
        let min = self.counts.iter().copied().min().unwrap_or(0);
        let max = self.counts.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}
