use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One SLO definition as written in the config file.
///
/// Every field is carried as text. `threshold` in particular is never parsed,
/// so values like `"99.90"` reach the generated expressions unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SloInput {
    pub service: String,
    pub slo_name: String,
    #[serde(rename = "alertname")]
    pub alert_name: String,
    pub alert_summary: String,
    pub success_query: String,
    pub total_query: String,
    pub threshold: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RecordingRule {
    pub record: String,
    pub expr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AlertRule {
    pub alert: String,
    pub expr: String,
    #[serde(rename = "for")]
    pub for_period: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

/// A single entry of a rule group. Serializes to the bare recording or alert
/// shape with no discriminator key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Rule {
    Recording(RecordingRule),
    Alert(AlertRule),
}

impl Rule {
    #[must_use]
    pub fn as_recording(&self) -> Option<&RecordingRule> {
        match self {
            Self::Recording(rule) => Some(rule),
            Self::Alert(_) => None,
        }
    }

    #[must_use]
    pub fn as_alert(&self) -> Option<&AlertRule> {
        match self {
            Self::Alert(rule) => Some(rule),
            Self::Recording(_) => None,
        }
    }
}

impl From<RecordingRule> for Rule {
    fn from(rule: RecordingRule) -> Self {
        Self::Recording(rule)
    }
}

impl From<AlertRule> for Rule {
    fn from(rule: AlertRule) -> Self {
        Self::Alert(rule)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleGroup {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    #[must_use]
    pub fn recording_rule_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|rule| matches!(rule, Rule::Recording(_)))
            .count()
    }

    #[must_use]
    pub fn alert_rule_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|rule| matches!(rule, Rule::Alert(_)))
            .count()
    }
}

/// Everything written to one destination file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RuleDocument {
    pub groups: Vec<RuleGroup>,
}

impl RuleDocument {
    #[must_use]
    pub fn recording_rule_count(&self) -> usize {
        self.groups
            .iter()
            .map(RuleGroup::recording_rule_count)
            .sum()
    }

    #[must_use]
    pub fn alert_rule_count(&self) -> usize {
        self.groups.iter().map(RuleGroup::alert_rule_count).sum()
    }
}

/// Output of the generator for one `SloInput`, kept split by rule kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedRules {
    pub recording: Vec<RecordingRule>,
    pub alerts: Vec<AlertRule>,
}

impl GeneratedRules {
    /// Recording rules first, then alert rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(self.recording.len() + self.alerts.len());
        rules.extend(self.recording.into_iter().map(Rule::from));
        rules.extend(self.alerts.into_iter().map(Rule::from));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert() -> AlertRule {
        AlertRule {
            alert: "A".to_string(),
            expr: "x > 1".to_string(),
            for_period: "2m".to_string(),
            labels: BTreeMap::from([("severity".to_string(), "critical".to_string())]),
            annotations: BTreeMap::new(),
        }
    }

    #[test]
    fn rule_serializes_without_variant_tag() {
        let recording = Rule::from(RecordingRule {
            record: "r".to_string(),
            expr: "e".to_string(),
        });
        let raw = serde_norway::to_string(&recording).expect("serialize");
        assert_eq!(raw, "record: r\nexpr: e\n");

        let raw = serde_norway::to_string(&Rule::from(alert())).expect("serialize");
        assert!(raw.starts_with("alert: A\n"));
        assert!(raw.contains("for: 2m\n"));
        assert!(!raw.contains("Alert"));
    }

    #[test]
    fn rule_deserializes_into_matching_shape() {
        let rule: Rule = serde_norway::from_str("record: r\nexpr: e\n").expect("parse");
        assert!(rule.as_recording().is_some());

        let raw = serde_norway::to_string(&Rule::from(alert())).expect("serialize");
        let rule: Rule = serde_norway::from_str(&raw).expect("parse");
        assert_eq!(rule.as_alert(), Some(&alert()));
    }

    #[test]
    fn generated_rules_place_recording_before_alert() {
        let generated = GeneratedRules {
            recording: vec![RecordingRule {
                record: "r".to_string(),
                expr: "e".to_string(),
            }],
            alerts: vec![alert()],
        };
        let rules = generated.into_rules();
        assert!(matches!(rules[0], Rule::Recording(_)));
        assert!(matches!(rules[1], Rule::Alert(_)));
    }

    #[test]
    fn slo_input_reads_config_field_names() {
        let raw = r#"
service: api
slo_name: avail
alertname: APIAvailability
alert_summary: API availability low
success_query: sum(rate(ok[$__range]))
total_query: sum(rate(all[$__range]))
threshold: "99.5"
"#;
        let input: SloInput = serde_norway::from_str(raw).expect("parse");
        assert_eq!(input.alert_name, "APIAvailability");
        assert_eq!(input.threshold, "99.5");
    }

    #[test]
    fn slo_input_rejects_unknown_fields() {
        let raw = "service: api\nslo_name: avail\nowner: team\n";
        assert!(serde_norway::from_str::<SloInput>(raw).is_err());
    }
}
