use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlogenError>;

#[derive(Debug, Error)]
pub enum SlogenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse failed: {0}")]
    ConfigParse(#[source] serde_norway::Error),

    #[error("rule document render failed: {0}")]
    Render(#[source] serde_norway::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

impl SlogenError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "READ_ERROR",
            Self::Write { .. } => "WRITE_ERROR",
            Self::ConfigParse(_) => "CONFIG_PARSE_ERROR",
            Self::Render(_) => "RENDER_ERROR",
            Self::Validation(_) => "VALIDATION_FAILED",
        }
    }
}
