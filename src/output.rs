//! Output sinks for reports and warnings
//!
//! The interpreter never prints directly. It hands REPORT results and
//! rejected commands to an [`OutputSink`], so the same run can write to the
//! console, be recorded for inspection, or be discarded.

use crate::error::CommandError;
use crate::json_output::{to_json_line, ReportEvent, WarningEvent};
use crate::robot::Placement;
use serde::{Deserialize, Serialize};
use std::io::{self, Stderr, Stdout, Write};

/// How reports and warnings are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Destination for everything a run emits
pub trait OutputSink {
    /// A successful REPORT
    fn report(&mut self, placement: &Placement) -> anyhow::Result<()>;

    /// A command that was rejected and left the robot unchanged
    fn warn(&mut self, warning: &CommandError) -> anyhow::Result<()>;
}

/// Writes reports to one stream and warnings to another.
pub struct WriterOutput<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
}

/// Reports on stdout, warnings on stderr
pub type ConsoleOutput = WriterOutput<Stdout, Stderr>;

impl ConsoleOutput {
    pub fn console(format: OutputFormat) -> Self {
        WriterOutput::new(io::stdout(), io::stderr(), format)
    }
}

impl<O: Write, E: Write> WriterOutput<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat) -> Self {
        Self { out, err, format }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> OutputSink for WriterOutput<O, E> {
    fn report(&mut self, placement: &Placement) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => write!(
                self.out,
                "REPORT - Final coordinates & Direction:\nX: {}, Y: {}, Facing: {}\n\n",
                placement.x, placement.y, placement.facing
            )?,
            OutputFormat::Json => {
                writeln!(self.out, "{}", to_json_line(&ReportEvent::new(placement))?)?
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn warn(&mut self, warning: &CommandError) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.err, "WARNING: {}", warning)?,
            OutputFormat::Json => {
                writeln!(self.err, "{}", to_json_line(&WarningEvent::new(warning))?)?
            }
        }
        Ok(())
    }
}

/// Keeps every report and warning in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    pub reports: Vec<Placement>,
    pub warnings: Vec<CommandError>,
}

impl OutputSink for RecordingOutput {
    fn report(&mut self, placement: &Placement) -> anyhow::Result<()> {
        self.reports.push(*placement);
        Ok(())
    }

    fn warn(&mut self, warning: &CommandError) -> anyhow::Result<()> {
        self.warnings.push(warning.clone());
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpOutput;

impl OutputSink for NoOpOutput {
    fn report(&mut self, _placement: &Placement) -> anyhow::Result<()> {
        Ok(())
    }

    fn warn(&mut self, _warning: &CommandError) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn report(&mut self, placement: &Placement) -> anyhow::Result<()> {
        (**self).report(placement)
    }

    fn warn(&mut self, warning: &CommandError) -> anyhow::Result<()> {
        (**self).warn(warning)
    }
}
