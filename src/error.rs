// src/error.rs
use std::path::PathBuf;

/// Result alias used across the pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// One variant per pipeline step. Every variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Persist to {} failed: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

impl Error {
    /// Short name of the step that failed, for log lines.
    pub fn step(&self) -> &'static str {
        match self {
            Error::Fetch { .. } => "fetch",
            Error::Parse(_) => "parse",
            Error::Persist { .. } => "persist",
        }
    }
}
