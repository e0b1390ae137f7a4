//! Console tic-tac-toe.
//!
//! Reads `start <player1> <player2>` / `exit` commands from stdin and
//! plays games between any mix of human and engine-controlled players.

#![warn(missing_docs)]

mod command;
mod game;
mod input;
mod render;

use anyhow::Result;
use command::Command;
use game::PlayerKind;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prompt shown before reading a command.
const ENTER_COMMAND: &str = "Enter command: ";

fn main() -> Result<()> {
    // Diagnostics go to stderr so the game transcript on stdout stays
    // clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let mut rng = rand::thread_rng();

    loop {
        print!("{ENTER_COMMAND}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // stdin closed; leave as if `exit` had been entered.
            return Ok(());
        }

        match command::parse(&line) {
            Ok(Command::Start(player1, player2)) => {
                debug!(?player1, ?player2, "starting game");
                game::run(PlayerKind::from(player1), PlayerKind::from(player2), &mut rng)?;
            }
            Ok(Command::Exit) => return Ok(()),
            Err(error) => println!("{error}"),
        }
    }
}
