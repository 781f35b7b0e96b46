use serde::Serialize;

/// Aggregated view of journey progress over the catalog, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// `completed` counts distinct catalog challenges with an entry; stale ids are ignored.
    #[must_use]
    pub fn new(total: usize, completed: usize) -> Self {
        let completed = completed.min(total);
        let remaining = total - completed;
        Self {
            total,
            completed,
            remaining,
            is_complete: remaining == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_remaining() {
        let progress = SessionProgress::new(5, 2);
        assert_eq!(progress.remaining, 3);
        assert!(!progress.is_complete);
    }

    #[test]
    fn clamps_overcount() {
        let progress = SessionProgress::new(2, 3);
        assert_eq!(progress.completed, 2);
        assert!(progress.is_complete);
    }
}
