use std::path::Path;

use serde::Serialize;
use slogen_core::{DestinationStatus, RuleDocument};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunReport {
    pub(crate) config: String,
    pub(crate) destinations: Vec<DestinationReport>,
}

impl RunReport {
    pub(crate) fn new(config_path: &Path) -> Self {
        Self {
            config: config_path.display().to_string(),
            destinations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, destination: DestinationReport) {
        self.destinations.push(destination);
    }

    pub(crate) fn outdated_count(&self) -> usize {
        self.destinations
            .iter()
            .filter(|destination| !destination.status.is_current())
            .count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DestinationReport {
    pub(crate) destination: String,
    pub(crate) path: String,
    pub(crate) groups: usize,
    pub(crate) recording_rules: usize,
    pub(crate) alert_rules: usize,
    pub(crate) status: DestinationStatus,
}

impl DestinationReport {
    pub(crate) fn new(
        destination: &str,
        path: &Path,
        document: &RuleDocument,
        status: DestinationStatus,
    ) -> Self {
        Self {
            destination: destination.to_string(),
            path: path.display().to_string(),
            groups: document.groups.len(),
            recording_rules: document.recording_rule_count(),
            alert_rules: document.alert_rule_count(),
            status,
        }
    }
}
