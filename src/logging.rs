//! Log filter setup for the command-line runner

use tracing_subscriber::filter::{Directive, EnvFilter};

pub const DEFAULT_DIRECTIVE: &str = "robosim=warn";
pub const VERBOSE_DIRECTIVE: &str = "robosim=debug";

/// Filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_DIRECTIVE`]. `verbose` adds [`VERBOSE_DIRECTIVE`] on top of
/// whatever the environment asked for.
pub fn build_filter(env_directives: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber, writing to stderr
pub fn init(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env_directives.as_deref(), verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
