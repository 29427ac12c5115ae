//! Fixture errors module

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a fixture. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Fixture {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Fixture {} must be a JSON array of answers, found {found}", path.display())]
    NotASequence { path: PathBuf, found: &'static str },
}

impl FixtureError {
    /// Path of the fixture that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            FixtureError::Io { path, .. }
            | FixtureError::Parse { path, .. }
            | FixtureError::NotASequence { path, .. } => path,
        }
    }
}
