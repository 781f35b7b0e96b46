//! Line-oriented interactive session over any reader/writer pair.

use std::io::{self, BufRead, Write};

use rand::Rng;
use services::{ChallengeSession, SessionError};

use crate::render;

const CONFIRM_WORD: &str = "yes";
/// A line holding only this ends a reflection; blank lines belong to the text.
const REFLECTION_END: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Complete,
    Skip,
    History,
    Reset,
    Quit,
}

impl Action {
    fn from_input(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "c" | "complete" => Some(Self::Complete),
            "s" | "skip" => Some(Self::Skip),
            "h" | "history" => Some(Self::History),
            "r" | "reset" => Some(Self::Reset),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the interactive loop until the user quits or input ends.
pub fn run<G: Rng>(
    session: &mut ChallengeSession<G>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        render::status(out, session.status())?;
        render::progress(out, &session.progress())?;
        if session.status().is_active() {
            writeln!(out, "[c] complete  [s] skip  [h] history  [r] reset  [q] quit")?;
        } else {
            writeln!(out, "[h] history  [r] reset and start over  [q] quit")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let Some(action) = Action::from_input(&line) else {
            writeln!(out, "Unknown command: {}", line.trim())?;
            continue;
        };

        match action {
            Action::Complete => complete(session, input, out)?,
            Action::Skip => {
                if session.status().is_active() {
                    let update = session.skip();
                    render::update(out, &update)?;
                } else {
                    writeln!(out, "There is no challenge to skip.")?;
                }
            }
            Action::History => render::journal(out, &session.journal())?,
            Action::Reset => reset(session, input, out)?,
            Action::Quit => return Ok(()),
        }
    }
}

fn complete<G: Rng>(
    session: &mut ChallengeSession<G>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    if !session.status().is_active() {
        return writeln!(out, "There is no active challenge to complete.");
    }

    writeln!(
        out,
        "Your reflection on this challenge (finish with a line containing only '{REFLECTION_END}'):"
    )?;
    out.flush()?;
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim() == REFLECTION_END {
            break;
        }
        lines.push(line);
    }

    match session.complete(&lines.join("\n")) {
        Ok(update) => render::update(out, &update),
        Err(SessionError::EmptyReflection) => {
            writeln!(out, "Please write a reflection before saving.")
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn reset<G: Rng>(
    session: &mut ChallengeSession<G>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    write!(
        out,
        "ARE YOU SURE you want to delete all your data? This cannot be undone. Type '{CONFIRM_WORD}' to confirm: "
    )?;
    out.flush()?;

    let confirmed = read_line(input)?.is_some_and(|l| l.trim() == CONFIRM_WORD);
    if confirmed {
        let update = session.reset_all();
        render::update(out, &update)
    } else {
        writeln!(out, "Keeping your data.")
    }
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}
