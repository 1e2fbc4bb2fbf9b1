//! Error types for scrollyplot.
//!
//! Only the ambient layer can fail (reading and validating configuration,
//! starting the native window). Chart operations themselves are total.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scrollyplot operations.
pub type Result<T> = std::result::Result<T, ScrollyError>;

#[derive(Debug, Error)]
pub enum ScrollyError {
    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`ScrollyConfig`](crate::config::ScrollyConfig).
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The configuration parsed but holds values outside their allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The native window could not be created or crashed.
    #[error("ui error: {0}")]
    Ui(#[from] eframe::Error),
}

impl ScrollyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
