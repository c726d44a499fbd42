//! gls - A three-pane terminal directory explorer.
//!
//! Usage:
//!   gls              Explore the current directory
//!   gls --help       Show help
//!
//! Environment:
//!   GLS_LOG          Write a debug log to this file
//!   GLS_LOG_LEVEL    Log level (error, warn, info, debug, trace)

use std::fs::File;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use gls_core::ListingConfig;
use gls_tui::TuiConfig;

#[derive(Parser)]
#[command(
    name = "gls",
    version,
    about = "A three-pane terminal directory explorer",
    long_about = "gls lists the current directory in the left pane. Press Enter \
                  on an entry to preview it on the right, and Enter again on a \
                  directory to open it in the middle pane."
)]
struct Cli {}

fn main() -> Result<()> {
    color_eyre::install()?;

    let _cli = Cli::parse();

    if let Ok(log_path) = std::env::var("GLS_LOG") {
        let level = std::env::var("GLS_LOG_LEVEL").ok();
        init_logging(Path::new(&log_path), parse_level(level.as_deref()))?;
    }

    let path = std::env::current_dir().context("Cannot determine current directory")?;
    log::info!("gls {} starting in {}", env!("CARGO_PKG_VERSION"), path.display());

    let config = TuiConfig::new().with_listing(ListingConfig::default());
    gls_tui::run_with_config(path, config)
}

/// Install the file logger.
fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    WriteLogger::init(level, log_config, log_file).context("Logger already installed")?;
    Ok(())
}

/// Parse a `GLS_LOG_LEVEL` value, defaulting to debug.
fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("bogus")), LevelFilter::Debug);
    }
}
