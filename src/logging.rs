//! Logger setup for the terminal binary.
//!
//! The game owns the terminal (raw mode, alternate screen), so log lines
//! never go to stderr.  They are appended to the file named by `SHOOTER_LOG`,
//! filtered by `RUST_LOG` (default `info`); with no file, logging is off.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::Result;

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "SHOOTER_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builder that appends to `path`, or discards everything when `path` is `None`.
pub fn builder(filters: &str, path: Option<&Path>) -> Result<Builder> {
    let mut builder = Builder::new();
    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.parse_filters(filters);
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    Ok(builder)
}

/// Install the global logger from `RUST_LOG` and `SHOOTER_LOG`.
pub fn init() -> Result<()> {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let path = std::env::var_os(LOG_ENV);
    // A logger installed earlier (tests, embedding hosts) wins.
    let _ = builder(&filters, path.as_deref().map(Path::new))?.try_init();
    Ok(())
}
