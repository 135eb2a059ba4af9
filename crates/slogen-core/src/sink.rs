use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SlogenError};
use crate::models::RuleDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationStatus {
    Written,
    UpToDate,
    Stale,
    Missing,
}

impl DestinationStatus {
    /// True when the file on disk matches what would be generated.
    #[must_use]
    pub const fn is_current(self) -> bool {
        matches!(self, Self::Written | Self::UpToDate)
    }
}

/// Relative destinations are placed under `output_dir` when one is given.
#[must_use]
pub fn resolve_destination(output_dir: Option<&Path>, destination: &str) -> PathBuf {
    let path = Path::new(destination);
    match output_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

pub fn render_document(document: &RuleDocument) -> Result<String> {
    serde_norway::to_string(document).map_err(SlogenError::Render)
}

pub fn write_document(path: &Path, document: &RuleDocument) -> Result<DestinationStatus> {
    let rendered = render_document(document)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SlogenError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, rendered).map_err(|source| SlogenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        groups = document.groups.len(),
        "wrote rule file"
    );
    Ok(DestinationStatus::Written)
}

/// Compares the rendered document with the file on disk without writing.
pub fn check_document(path: &Path, document: &RuleDocument) -> Result<DestinationStatus> {
    let rendered = render_document(document)?;
    let status = match fs::read_to_string(path) {
        Ok(existing) if existing == rendered => DestinationStatus::UpToDate,
        Ok(_) => DestinationStatus::Stale,
        Err(err) if err.kind() == ErrorKind::NotFound => DestinationStatus::Missing,
        Err(source) => {
            return Err(SlogenError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !status.is_current() {
        tracing::warn!(path = %path.display(), ?status, "rule file is out of date");
    }
    Ok(status)
}
