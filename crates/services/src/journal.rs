//! Read-only history of past reflections.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mindset_core::model::CompletedEntry;

/// One row of the journal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalRow {
    /// Display date: `%Y-%m-%d %H:%M` when parseable, the stored text otherwise.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub challenge_id: String,
    pub challenge: String,
    pub reflection: String,
}

impl JournalRow {
    #[must_use]
    pub fn from_entry(entry: &CompletedEntry) -> Self {
        let completed_at = entry.completed_at();
        let date = completed_at.map_or_else(
            || entry.date_completed().to_owned(),
            |at| at.format("%Y-%m-%d %H:%M").to_string(),
        );
        Self {
            date,
            completed_at,
            challenge_id: entry.challenge_id().to_string(),
            challenge: entry.challenge_text().to_owned(),
            reflection: entry.reflection().to_owned(),
        }
    }
}

/// Builds journal rows, newest first.
///
/// Entries sharing a timestamp keep reverse insertion order, since later
/// entries were recorded later. Sorting only happens when every timestamp
/// parses; a single unparseable date keeps the stored (insertion) order for
/// the whole table.
#[must_use]
pub fn journal_rows(entries: &[CompletedEntry]) -> Vec<JournalRow> {
    let mut rows: Vec<JournalRow> = entries.iter().map(JournalRow::from_entry).collect();
    if rows.iter().all(|row| row.completed_at.is_some()) {
        // Stable sort over the reversed list breaks ties newest-recorded first.
        rows.reverse();
        rows.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindset_core::model::ChallengeId;

    fn entry(id: &str, date: &str) -> CompletedEntry {
        CompletedEntry::from_persisted(
            ChallengeId::new(id),
            format!("Prompt {id}"),
            format!("Reflection {id}"),
            date.to_owned(),
        )
    }

    fn ids(rows: &[JournalRow]) -> Vec<&str> {
        rows.iter().map(|r| r.challenge_id.as_str()).collect()
    }

    #[test]
    fn sorts_newest_first() {
        let rows = journal_rows(&[
            entry("c1", "2024-01-01T10:00:00"),
            entry("c2", "2024-03-05T08:30:00Z"),
            entry("c3", "2024-02-10T21:15:00+01:00"),
        ]);
        assert_eq!(ids(&rows), ["c2", "c3", "c1"]);
        assert_eq!(rows[0].date, "2024-03-05 08:30");
        assert_eq!(rows[1].date, "2024-02-10 20:15");
    }

    #[test]
    fn same_timestamp_lists_later_entry_first() {
        let rows = journal_rows(&[
            entry("c1", "2024-01-01T09:00:00Z"),
            entry("c3", "2024-01-01T10:00:00Z"),
            entry("c2", "2024-01-01T10:00:00Z"),
        ]);
        assert_eq!(ids(&rows), ["c2", "c3", "c1"]);
    }

    #[test]
    fn unparseable_date_keeps_insertion_order() {
        let rows = journal_rows(&[
            entry("c1", "2024-01-01T10:00:00"),
            entry("c2", "sometime in spring"),
            entry("c3", "2024-02-10T21:15:00"),
        ]);
        assert_eq!(ids(&rows), ["c1", "c2", "c3"]);
        assert_eq!(rows[1].date, "sometime in spring");
        assert_eq!(rows[1].completed_at, None);
    }

    #[test]
    fn empty_journal_has_no_rows() {
        assert!(journal_rows(&[]).is_empty());
    }
}
