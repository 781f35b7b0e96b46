mod cli;
mod interactive;
mod render;
mod seed;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use services::{
    AppServices, AppServicesError, ChallengeSession, Clock, SessionError, SessionUpdate,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn init_tracing() {
    // Logs go to stderr so they never interleave with rendered output.
    let filter = EnvFilter::try_from_env("MINDSET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open_session(cli: &Cli) -> Result<(ChallengeSession, SessionUpdate), AppServicesError> {
    let services =
        AppServices::new_json(cli.catalog_path(), cli.state_path(), Clock::default_clock())?;
    services.open_session().inspect_err(|e| {
        if matches!(e, AppServicesError::Session(SessionError::Catalog(_))) {
            eprintln!("CRITICAL: no challenges loaded. Run `mindset seed` to create a starter catalog.");
        }
    })
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Seed { force }) = &cli.command {
        let path = cli.catalog_path();
        let count = seed::write_catalog(&path, *force)?;
        println!("Wrote {count} challenges to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let (mut session, startup) = open_session(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr().lock();
    render::update(&mut err, &startup)?;

    match cli.command {
        None | Some(Command::Interactive) => {
            let stdin = io::stdin();
            interactive::run(&mut session, &mut stdin.lock(), &mut out)?;
        }
        Some(Command::Today) => render::status(&mut out, session.status())?,
        Some(Command::Complete { text, stdin }) => {
            let reflection = if stdin { read_stdin()? } else { text.join(" ") };
            match session.complete(&reflection) {
                Ok(update) => {
                    render::update(&mut out, &update)?;
                    render::status(&mut out, session.status())?;
                }
                Err(e @ (SessionError::EmptyReflection | SessionError::NoActiveChallenge)) => {
                    writeln!(err, "{e}")?;
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Command::Skip) => {
            if !session.status().is_active() {
                writeln!(err, "There is no challenge to skip.")?;
                return Ok(ExitCode::FAILURE);
            }
            let update = session.skip();
            render::update(&mut err, &update)?;
            render::status(&mut out, session.status())?;
        }
        Some(Command::History { json }) => {
            let rows = session.journal();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                render::journal(&mut out, &rows)?;
            }
        }
        Some(Command::Progress { json }) => {
            let progress = session.progress();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&progress)?)?;
            } else {
                render::progress(&mut out, &progress)?;
            }
        }
        Some(Command::Reset { yes }) => {
            if !yes {
                writeln!(
                    err,
                    "This deletes all your reflections and cannot be undone. Re-run with --yes to confirm."
                )?;
                return Ok(ExitCode::FAILURE);
            }
            let update = session.reset_all();
            render::update(&mut out, &update)?;
            render::status(&mut out, session.status())?;
        }
        // Handled before the session opens.
        Some(Command::Seed { .. }) => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
