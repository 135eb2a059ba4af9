use crate::generate::generate_rules;
use crate::models::{RuleDocument, RuleGroup, SloInput};
use crate::naming::SeriesNamer;

/// One group named `<service>_<slo_name>_slo`, recording rules before alerts.
#[must_use]
pub fn assemble_group(input: &SloInput) -> RuleGroup {
    RuleGroup {
        name: SeriesNamer::for_input(input).group_name(),
        rules: generate_rules(input).into_rules(),
    }
}

/// One group per input, in input order. Inputs are never merged.
#[must_use]
pub fn assemble_groups(inputs: &[SloInput]) -> Vec<RuleGroup> {
    inputs.iter().map(assemble_group).collect()
}

#[must_use]
pub fn assemble_document(inputs: &[SloInput]) -> RuleDocument {
    RuleDocument {
        groups: assemble_groups(inputs),
    }
}
