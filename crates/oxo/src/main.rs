//! Terminal front end: interactive matches and leaderboard display.

#![warn(missing_docs)]

mod cli;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use oxo::{Leaderboard, MatchMode, MatchPhase, MatchSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            name,
            mark,
            leaderboard,
        } => run_match(MatchMode::vs_computer(name, mark.into())?, &leaderboard),
        Command::Duel {
            player_x,
            player_o,
            leaderboard,
        } => run_match(MatchMode::two_player(player_x, player_o)?, &leaderboard),
        Command::Leaderboard { file } => run_leaderboard(&file),
    }
}

/// Plays matches in `mode` until the player declines a rematch.
fn run_match(mode: MatchMode, leaderboard: &Path) -> Result<()> {
    info!(?mode, "Starting session");
    let mut session = MatchSession::new(Leaderboard::open(leaderboard));
    session.configure(mode.clone())?;

    loop {
        let completed = play_out(&mut session)?;
        if !completed {
            return Ok(());
        }
        print_standings(&session);
        if !prompt_rematch()? {
            return Ok(());
        }
        session.restart();
        session.configure(mode.clone())?;
    }
}

/// Drives one match to its end.
///
/// Returns `Ok(false)` when the player quits or stdin closes before the
/// match finishes.
fn play_out(session: &mut MatchSession) -> Result<bool> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while session.phase() == MatchPhase::InProgress {
        let Some(mark) = session.to_move() else {
            break;
        };
        let name = session
            .participants()
            .map(|participants| participants.by_mark(mark).name().to_string())
            .unwrap_or_else(|| mark.to_string());

        println!("\n{}\n", session.board());
        print!("{name} ({mark}) to move. Enter row and column (0-2), or q to quit: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(false);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        let Some((row, col)) = parse_coordinates(input) else {
            println!("Enter two numbers between 0 and 2, like: 1 2");
            continue;
        };
        if let Err(err) = session.submit_move(mark, row, col) {
            println!("{err}");
        }
    }

    println!("\n{}\n", session.board());
    if let Some(outcome) = session.outcome() {
        println!("{outcome} after {} moves.", session.history().len());
    }
    Ok(true)
}

/// Parses a "row col" pair; extra tokens invalidate the input.
fn parse_coordinates(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Prints both participants' stored records.
fn print_standings(session: &MatchSession) {
    let Some(participants) = session.participants() else {
        return;
    };
    let store = session.leaderboard();
    for participant in [participants.player_x(), participants.player_o()] {
        let record = store.record_for(participant.name().as_str());
        println!(
            "{}: {} wins, {} losses, {} ties",
            participant.name(),
            record.wins(),
            record.losses(),
            record.ties()
        );
    }
}

fn prompt_rematch() -> Result<bool> {
    print!("Play again? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    let read = std::io::stdin().read_line(&mut answer)?;
    Ok(read > 0 && answer.trim().eq_ignore_ascii_case("y"))
}

/// Prints the stored table, or a friendly line when nobody has played.
fn run_leaderboard(file: &Path) -> Result<()> {
    let store = Leaderboard::open(file);
    let records = store.records();
    if records.is_empty() {
        println!("No games played yet.");
        return Ok(());
    }

    let width = records
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Player".len());
    println!("{:<width$}  {:>5}  {:>6}  {:>5}", "Player", "Wins", "Losses", "Ties");
    for (name, record) in records {
        println!(
            "{:<width$}  {:>5}  {:>6}  {:>5}",
            name,
            record.wins(),
            record.losses(),
            record.ties()
        );
    }
    Ok(())
}
