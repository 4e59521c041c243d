//! Process initialization utilities
//!
//! Standardized tracing setup and argument parsing shared by both binaries.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::FAILURE_EXIT_CODE;

/// Initialize tracing/logging for a tool
///
/// Sets up logging to stderr (stdout carries the tool's output) with:
/// - Formatted output without ANSI colors
/// - Environment-based filtering via RUST_LOG
/// - A default level for the crate picked from `verbosity`
///
/// Set `LOG_FORMAT=json` for structured JSON output.
///
/// # Arguments
///
/// * `crate_name` - The crate to filter on (e.g., "issue_fetcher")
/// * `verbosity` - Count of `-v` flags (0 warn, 1 info, 2 debug, 3+ trace)
pub fn init_tracing(crate_name: &str, verbosity: u8) -> anyhow::Result<()> {
    let level = level_for(verbosity);
    let mut filter = EnvFilter::from_default_env()
        .add_directive(format!("{}={}", crate_name, level).parse()?);
    if crate_name != "gh_common" {
        filter = filter.add_directive(format!("gh_common={}", level).parse()?);
    }

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse command-line arguments, exiting on usage errors
///
/// Help and version output exit 0. Every other parse error is a usage error
/// and exits with [`FAILURE_EXIT_CODE`] before anything else runs.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                e.print().ok();
                std::process::exit(i32::from(FAILURE_EXIT_CODE));
            }
        },
    }
}
