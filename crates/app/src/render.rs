//! Terminal rendering for session state and the journal.

use std::io::{self, Write};

use services::{JournalRow, SessionEvent, SessionProgress, SessionStatus, SessionUpdate};

const CHALLENGE_COLUMN_MAX: usize = 40;

pub fn status(out: &mut impl Write, status: &SessionStatus) -> io::Result<()> {
    match status {
        SessionStatus::ChallengeActive(challenge) => {
            writeln!(out, "Today's Challenge:")?;
            writeln!(out, "  {}", challenge.text())?;
            writeln!(out, "  (Category: {})", challenge.category_label())
        }
        SessionStatus::AllCompleted => {
            writeln!(out, "You've completed all available challenges! Well done!")
        }
        SessionStatus::NoChallengeAssigned => writeln!(out, "No challenge assigned."),
    }
}

pub fn progress(out: &mut impl Write, progress: &SessionProgress) -> io::Result<()> {
    writeln!(
        out,
        "Progress: {}/{} challenges completed ({} remaining)",
        progress.completed, progress.total, progress.remaining
    )
}

/// Feedback for what an operation did, plus any recoverable warnings.
pub fn update(out: &mut impl Write, update: &SessionUpdate) -> io::Result<()> {
    for event in &update.events {
        match event {
            SessionEvent::Completed(_) => {
                writeln!(out, "Great job! Your reflection has been saved.")?;
            }
            SessionEvent::Reset => writeln!(out, "All user data has been cleared.")?,
            SessionEvent::Resumed(_) | SessionEvent::Assigned(_) | SessionEvent::Exhausted => {}
        }
    }
    for notice in &update.notices {
        writeln!(out, "warning: {notice}")?;
    }
    Ok(())
}

pub fn journal(out: &mut impl Write, rows: &[JournalRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No reflections saved yet. Complete your first challenge!");
    }

    let cells: Vec<(String, String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.date.clone(),
                truncate(&row.challenge, CHALLENGE_COLUMN_MAX),
                single_line(&row.reflection),
            )
        })
        .collect();

    let date_width = column_width("Date", cells.iter().map(|c| c.0.as_str()));
    let challenge_width = column_width("Challenge", cells.iter().map(|c| c.1.as_str()));

    writeln!(
        out,
        "{} | {} | Your Reflection",
        pad("Date", date_width),
        pad("Challenge", challenge_width)
    )?;
    writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(date_width),
        "-".repeat(challenge_width),
        "-".repeat("Your Reflection".len())
    )?;
    for (date, challenge, reflection) in &cells {
        writeln!(
            out,
            "{} | {} | {}",
            pad(date, date_width),
            pad(challenge, challenge_width),
            reflection
        )?;
    }
    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

fn truncate(value: &str, max: usize) -> String {
    let value = single_line(value);
    if value.chars().count() <= max {
        return value;
    }
    let mut cut: String = value.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn single_line(value: &str) -> String {
    value.lines().map(str::trim).collect::<Vec<_>>().join(" / ")
}
