//! Errors surfaced by the host: terminal I/O and configuration.
//!
//! Game rules never fail; these only come from the edges.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    /// The config file exists but is not valid JSON for `GameConfig`.
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "terminal I/O failed: {}", e),
            GameError::ConfigParse { path, source } => {
                write!(f, "could not parse config {}: {}", path.display(), source)
            }
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::ConfigParse { source, .. } => Some(source),
            GameError::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
