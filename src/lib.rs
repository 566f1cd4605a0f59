//! Robosim - toy robot simulator
//!
//! A single robot moves on an N×N table under a five-command language:
//! `PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT` and `REPORT`. Commands that would
//! push the robot off the table, or that arrive before it has been placed,
//! are rejected with a warning and change nothing.
//!
//! # Quick Start
//!
//! ```rust
//! use robosim::{Grid, Interpreter, RecordingOutput, Robot};
//!
//! let robot = Robot::new(Grid::new(5).unwrap());
//! let mut interpreter = Interpreter::new(robot, RecordingOutput::default());
//! interpreter.run(["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
//!
//! let report = interpreter.sink().reports[0];
//! assert_eq!((report.x, report.y), (0, 1));
//! ```
//!
//! # Architecture
//!
//! - **source**: reads input into trimmed, non-empty lines
//! - **command**: parses a line into a [`Command`]
//! - **robot**: the `Unplaced` / `Placed` state machine
//! - **interpreter**: applies commands in order and routes diagnostics
//! - **output**: sinks that render reports and warnings

pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod json_output;
pub mod logging;
pub mod output;
pub mod robot;
pub mod source;

pub use command::{Command, ParseCommandError};
pub use config::{config_path, RunSettings, SimConfig, CONFIG_ENV_VAR};
pub use direction::Direction;
pub use error::{CommandError, Result, SimError};
pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use interpreter::{run_commands, Interpreter, Outcome, RunSummary};
pub use output::{
    ConsoleOutput, NoOpOutput, OutputFormat, OutputSink, RecordingOutput, WriterOutput,
};
pub use robot::{Placement, Robot, RobotState};
pub use source::{load_commands, parse_lines, read_commands, read_commands_to};
