//! Command language parsing
//!
//! Grammar, one command per line:
//! - `PLACE X,Y,F` with exactly one space after the keyword
//! - `MOVE`, `LEFT`, `RIGHT`, `REPORT` as exact literals
//!
//! Keywords are case-sensitive; direction names are not. A line whose first
//! token is not one of the five keywords is not a command at all and is
//! ignored without a diagnostic.

use crate::direction::Direction;
use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

const PLACE: &str = "PLACE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { x: i32, y: i32, facing: Direction },
    Move,
    Left,
    Right,
    Report,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for lines that are not commands, and `Err` only for
    /// lines that start with the `PLACE` keyword but are malformed.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        if line.split(' ').next() == Some(PLACE) {
            return parse_place(line).map(Some);
        }

        Ok(match line {
            "MOVE" => Some(Command::Move),
            "LEFT" => Some(Command::Left),
            "RIGHT" => Some(Command::Right),
            "REPORT" => Some(Command::Report),
            _ => None,
        })
    }

    /// Keyword of this command as it appears in input
    pub fn name(&self) -> &'static str {
        match self {
            Command::Place { .. } => PLACE,
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
        }
    }
}

fn parse_place(line: &str) -> Result<Command, CommandError> {
    let parts = split_fields(line, ' ');
    if parts.len() != 2 {
        return Err(CommandError::InvalidPlaceFormat {
            line: line.to_string(),
        });
    }

    let args = split_fields(parts[1], ',');
    if args.len() != 3 {
        return Err(CommandError::InvalidPlaceArguments {
            line: line.to_string(),
        });
    }

    let (x, y) = match (args[0].parse::<i32>(), args[1].parse::<i32>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            return Err(CommandError::InvalidCoordinates {
                line: line.to_string(),
            })
        }
    };

    let facing = args[2]
        .parse::<Direction>()
        .map_err(|_| CommandError::InvalidDirection {
            line: line.to_string(),
        })?;

    Ok(Command::Place { x, y, facing })
}

/// Split on `sep`, discarding empty fields at the end only.
fn split_fields(s: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

/// Error for [`Command::from_str`], which rejects anything that is not a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Unrecognized(String),
    Invalid(CommandError),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCommandError::Unrecognized(line) => write!(f, "unrecognized command: {}", line),
            ParseCommandError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Command::parse(s) {
            Ok(Some(command)) => Ok(command),
            Ok(None) => Err(ParseCommandError::Unrecognized(s.to_string())),
            Err(err) => Err(ParseCommandError::Invalid(err)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, facing } => write!(f, "{} {},{},{}", PLACE, x, y, facing),
            other => f.write_str(other.name()),
        }
    }
}
