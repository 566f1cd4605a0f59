//! Command source
//!
//! Turns raw text into the ordered list of trimmed, non-empty lines the
//! interpreter consumes. Input is read completely and closed before any
//! command runs.

use crate::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{error, info};

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

/// Trim every line and drop the ones left empty
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            commands.push(trimmed.to_string());
        }
    }
    Ok(commands)
}

pub fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_PATH)
}

/// Read all commands from `path`, or from stdin when `path` is `-`.
pub fn load_commands(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let commands = if is_stdin(path) {
        read_from(io::stdin().lock())?
    } else {
        read_from(BufReader::new(File::open(path)?))?
    };
    info!("Loaded {} commands from {}", commands.len(), path.display());
    Ok(commands)
}

/// Like [`load_commands`], but an unreadable source logs an error and
/// yields no commands.
pub fn read_commands(path: impl AsRef<Path>) -> Vec<String> {
    read_commands_to(path, &mut io::sink())
}

/// Lenient read that also writes the failure line to `diagnostics`,
/// independent of the log filter.
pub fn read_commands_to<W: Write>(path: impl AsRef<Path>, diagnostics: &mut W) -> Vec<String> {
    let path = path.as_ref();
    match load_commands(path) {
        Ok(commands) => commands,
        Err(e) => {
            let message = format!("Failed to read input file: {}, Reason: {}", path.display(), e);
            error!("{}", message);
            if let Err(write_err) = writeln!(diagnostics, "ERROR: {}", message) {
                error!("Failed to write diagnostic: {}", write_err);
            }
            Vec::new()
        }
    }
}
