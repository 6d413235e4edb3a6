use thiserror::Error;

use crate::commands::error::{InitError, NetworkError, ProjectLocationError};

/// Top-level CLI error that composes all module-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Initialization error: {0}")]
    Init(#[from] InitError),

    #[error("Project error: {0}")]
    ProjectLocation(#[from] ProjectLocationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for CliError {
    fn from(err: String) -> Self {
        CliError::Internal(err)
    }
}
