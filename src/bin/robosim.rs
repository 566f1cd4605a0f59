//! Robosim - command-line runner
//!
//! Reads a command file (or stdin), runs it against a fresh robot and
//! prints REPORT output on stdout and warnings on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use robosim::{
    config_path, logging, read_commands_to, ConsoleOutput, Interpreter, OutputFormat, Robot,
    SimConfig, CONFIG_ENV_VAR,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "robosim")]
#[command(about = "Toy robot simulator - runs PLACE/MOVE/LEFT/RIGHT/REPORT commands")]
#[command(version)]
struct Args {
    /// Command file to run, `-` for stdin
    input: Option<String>,

    /// Path to a YAML configuration file (falls back to $ROBOSIM_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Side length of the square grid (overrides config)
    #[arg(short, long)]
    grid_size: Option<i32>,

    /// Output format for reports and warnings (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Show debug logging, added on top of any RUST_LOG directives
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn get_config_path(&self) -> Option<String> {
        config_path(self.config.clone(), std::env::var(CONFIG_ENV_VAR).ok())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match args.get_config_path() {
        Some(path) => {
            info!("Using config: {}", path);
            SimConfig::load(&path).with_context(|| format!("Failed to load config {}", path))?
        }
        None => SimConfig::default(),
    };

    let settings = config
        .resolve(args.grid_size, args.format, args.input.clone())
        .context("Invalid grid size")?;
    let grid = settings.grid;

    debug!(
        "Grid {}x{}, format {:?}, input {}",
        grid.size(),
        grid.size(),
        settings.format,
        settings.input
    );

    // Source is fully drained before the first command runs
    let commands = read_commands_to(&settings.input, &mut std::io::stderr());

    let output = ConsoleOutput::console(settings.format);
    let mut interpreter = Interpreter::new(Robot::new(grid), output);
    let summary = interpreter.run(&commands);

    info!(
        "Run complete: {} commands, {} applied, {} warnings, {} ignored, {} reports",
        summary.commands, summary.applied, summary.warnings, summary.ignored, summary.reports
    );

    Ok(())
}
