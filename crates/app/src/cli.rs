use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Daily growth mindset challenges with a reflection journal.
#[derive(Debug, Parser)]
#[command(name = "mindset", version, about = "Daily growth mindset challenges with a reflection journal")]
pub struct Cli {
    /// Path to the challenge catalog (JSON array of {id, challenge, category?})
    #[arg(long, global = true, env = "MINDSET_CATALOG", default_value = "data/challenges.json")]
    pub catalog: PathBuf,

    /// Path to the user data file
    #[arg(long, global = true, env = "MINDSET_STATE", default_value = "data/user_data.json")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive session (the default when no subcommand is given)
    Interactive,

    /// Show today's challenge
    Today,

    /// Mark the current challenge as completed with a reflection
    Complete {
        /// Reflection text; joined with spaces
        text: Vec<String>,
        /// Read the reflection from standard input instead
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
    },

    /// Get a different challenge without recording anything
    Skip,

    /// List past reflections, newest first
    History {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how many challenges are done
    Progress {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete all progress and start over
    Reset {
        /// Confirm deletion; without it nothing is deleted
        #[arg(long)]
        yes: bool,
    },

    /// Write the bundled starter catalog to the catalog path
    Seed {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        absolutize(&self.catalog)
    }

    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        absolutize(&self.state)
    }
}

/// Resolves a relative path against the working directory.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}
