//! Command interpreter
//!
//! Applies command lines to a robot strictly in input order. A rejected
//! command produces one warning on the sink and the run carries on; nothing
//! in the command stream can abort it.

use crate::command::Command;
use crate::error::CommandError;
use crate::output::OutputSink;
use crate::robot::Robot;
use tracing::{debug, error};

/// What happened to a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and the robot was updated or reported
    Applied(Command),
    /// The line was a command but was rejected with a warning
    Rejected,
    /// The line is not a command; nothing happened and nothing was said
    Ignored,
}

/// Tally of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub applied: usize,
    pub warnings: usize,
    pub ignored: usize,
    pub reports: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        self.commands += 1;
        match outcome {
            Outcome::Applied(command) => {
                self.applied += 1;
                if command == Command::Report {
                    self.reports += 1;
                }
            }
            Outcome::Rejected => self.warnings += 1,
            Outcome::Ignored => self.ignored += 1,
        }
    }
}

/// Owns the robot for the duration of a run
pub struct Interpreter<S: OutputSink> {
    robot: Robot,
    sink: S,
    summary: RunSummary,
}

impl<S: OutputSink> Interpreter<S> {
    pub fn new(robot: Robot, sink: S) -> Self {
        Self {
            robot,
            sink,
            summary: RunSummary::default(),
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Totals across every line executed so far
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn into_parts(self) -> (Robot, S) {
        (self.robot, self.sink)
    }

    /// Parse and apply a single line
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let outcome = execute_line(&mut self.robot, &mut self.sink, line);
        self.summary.record(outcome);
        outcome
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = apply(&mut self.robot, &mut self.sink, command);
        self.summary.record(outcome);
        outcome
    }

    /// Apply every line in order and return the tally for this call
    pub fn run<I>(&mut self, lines: I) -> RunSummary
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut summary = RunSummary::default();
        for line in lines {
            let outcome = self.execute_line(line.as_ref());
            summary.record(outcome);
        }
        summary
    }
}

/// Run `lines` against a borrowed robot
pub fn run_commands<I, S>(robot: &mut Robot, lines: I, sink: &mut S) -> RunSummary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: OutputSink + ?Sized,
{
    let mut summary = RunSummary::default();
    for line in lines {
        summary.record(execute_line(robot, &mut *sink, line.as_ref()));
    }
    summary
}

fn execute_line<S>(robot: &mut Robot, sink: &mut S, line: &str) -> Outcome
where
    S: OutputSink + ?Sized,
{
    match Command::parse(line) {
        Ok(Some(command)) => apply(robot, sink, command),
        Ok(None) => {
            debug!("Ignoring unrecognized line: {:?}", line);
            Outcome::Ignored
        }
        Err(warning) => {
            emit_warning(sink, &warning);
            Outcome::Rejected
        }
    }
}

fn apply<S: OutputSink + ?Sized>(robot: &mut Robot, sink: &mut S, command: Command) -> Outcome {
    debug!("Executing {}", command);

    let result = match command {
        Command::Place { x, y, facing } => robot.place(x, y, facing),
        Command::Move => robot.move_forward(),
        Command::Left => robot.left(),
        Command::Right => robot.right(),
        Command::Report => robot.report().map(|placement| {
            if let Err(e) = sink.report(&placement) {
                error!("Failed to write report: {}", e);
            }
            placement
        }),
    };

    match result {
        Ok(_) => Outcome::Applied(command),
        Err(warning) => {
            emit_warning(sink, &warning);
            Outcome::Rejected
        }
    }
}

fn emit_warning<S: OutputSink + ?Sized>(sink: &mut S, warning: &CommandError) {
    debug!("Rejected: {}", warning);
    if let Err(e) = sink.warn(warning) {
        error!("Failed to write warning: {}", e);
    }
}
