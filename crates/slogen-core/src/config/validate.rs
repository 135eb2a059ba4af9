use std::collections::HashSet;

use crate::error::{Result, SlogenError};
use crate::naming::SeriesNamer;

use super::SloConfig;

/// Rejects configs whose generated names would be empty or collide within
/// one destination.
pub fn validate_config(config: &SloConfig) -> Result<()> {
    if config.slo_files.is_empty() {
        return Err(SlogenError::Validation(
            "slo_files must name at least one destination".to_string(),
        ));
    }

    for (destination, inputs) in &config.slo_files {
        if destination.trim().is_empty() {
            return Err(SlogenError::Validation(
                "slo_files destination must not be empty".to_string(),
            ));
        }

        let mut group_names = HashSet::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            if input.service.trim().is_empty() {
                return Err(SlogenError::Validation(format!(
                    "{destination}[{index}]: service must not be empty"
                )));
            }
            if input.slo_name.trim().is_empty() {
                return Err(SlogenError::Validation(format!(
                    "{destination}[{index}]: slo_name must not be empty"
                )));
            }

            let group_name = SeriesNamer::for_input(input).group_name();
            if !group_names.insert(group_name.clone()) {
                return Err(SlogenError::Validation(format!(
                    "{destination}[{index}]: duplicate group '{group_name}'"
                )));
            }
        }
    }

    Ok(())
}
