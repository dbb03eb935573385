//! Load error taxonomy.

use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Errors that abort a dataset load.
///
/// Two user-visible failure classes exist: the file could not be delivered
/// at all, or its CSV structure could not be parsed. Either one abandons
/// the whole load; there is no partial acceptance. Per-row validation
/// failures are not errors and never surface here.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Transport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV structure error: {detail}")]
    Parse { detail: String },

    #[error("load task failed: {0}")]
    Join(#[from] JoinError),
}

impl LoadError {
    /// Generic message shown in the dashboard. Details stay in the logs;
    /// the UI wording is fixed and never embeds paths or line numbers.
    pub fn ui_message(&self) -> &'static str {
        match self {
            LoadError::Transport { .. } | LoadError::Join(_) => "Error loading data file",
            LoadError::Parse { .. } => "Error parsing CSV data",
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::Parse {
            detail: error.to_string(),
        }
    }
}
