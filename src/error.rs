use std::path::PathBuf;

/// Errors raised while producing blame data or loading color settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git blame exited with {status}: {stderr}")]
    GitFailed { status: String, stderr: String },

    #[error("Path has no parent directory: {}", .0.display())]
    NoParentDirectory(PathBuf),

    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
