//! Start/exit command parsing.

use derive_more::{Display, Error};
use noughts_engine::Difficulty;

/// A validated console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a game; the first parameter controls X, the second O.
    Start(Difficulty, Difficulty),
    /// Leave the command loop.
    Exit,
}

/// Rejection of a command line; the display text is printed verbatim
/// before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Bad parameters!")]
pub struct BadParameters;

/// Parses one line from the command prompt.
///
/// `start` takes two player parameters (`user`, `easy`, `medium`,
/// `hard`); extra trailing words are ignored. Command and parameters
/// are case-insensitive.
pub fn parse(line: &str) -> Result<Command, BadParameters> {
    let mut words = line.split_whitespace();

    match words.next() {
        Some(word) if word.eq_ignore_ascii_case("exit") => Ok(Command::Exit),
        Some(word) if word.eq_ignore_ascii_case("start") => {
            let player1 = parse_difficulty(words.next())?;
            let player2 = parse_difficulty(words.next())?;
            Ok(Command::Start(player1, player2))
        }
        _ => Err(BadParameters),
    }
}

fn parse_difficulty(word: Option<&str>) -> Result<Difficulty, BadParameters> {
    word.and_then(|w| w.parse().ok()).ok_or(BadParameters)
}
