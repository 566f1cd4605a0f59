//! Error types for the robot simulator
//!
//! `SimError` covers setup failures (config, input files). `CommandError`
//! covers a single rejected command; it never stops a run.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A command that was rejected and left the robot untouched.
///
/// The `Display` output is the diagnostic text that follows `WARNING: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command} ignored (robot not placed yet)")]
    NotPlaced { command: &'static str },

    #[error("PLACE ignored (coordinates would be out of bounds; X: {x}, Y: {y})")]
    PlaceOutOfBounds { x: i32, y: i32 },

    #[error("MOVE ignored (new coordinates would be out of bounds; X: {x}, Y: {y})")]
    MoveOutOfBounds { x: i32, y: i32 },

    #[error("PLACE ignored (invalid format, expected 'PLACE X,Y,F'; line: {line})")]
    InvalidPlaceFormat { line: String },

    #[error("PLACE ignored (invalid arguments, expected 'X,Y,F'; line: {line})")]
    InvalidPlaceArguments { line: String },

    #[error("PLACE ignored (coordinates must be integers; line: {line})")]
    InvalidCoordinates { line: String },

    #[error("PLACE ignored (direction must be NORTH, SOUTH, EAST or WEST; line: {line})")]
    InvalidDirection { line: String },
}

impl CommandError {
    /// Name of the command that was rejected
    pub fn command(&self) -> &'static str {
        match self {
            CommandError::NotPlaced { command } => *command,
            CommandError::MoveOutOfBounds { .. } => "MOVE",
            CommandError::PlaceOutOfBounds { .. }
            | CommandError::InvalidPlaceFormat { .. }
            | CommandError::InvalidPlaceArguments { .. }
            | CommandError::InvalidCoordinates { .. }
            | CommandError::InvalidDirection { .. } => "PLACE",
        }
    }
}
