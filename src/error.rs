//! Startup error types.
//!
//! Environment failures are fatal: the driver logs them and exits with a
//! non-zero status.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StartupError {
    /// The score font could not be read or parsed.
    FontLoad {
        /// Path given on the command line.
        path: PathBuf,
        /// Loader's description of the failure.
        reason: String,
    },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::FontLoad { path, reason } => {
                write!(f, "failed to load font {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for StartupError {}
