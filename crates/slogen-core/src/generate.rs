//! Expands one [`SloInput`] into its recording and alert rules.
//!
//! Output order is fixed: base rates per short window, time-averaged rates per
//! long window, success ratios per window, then one alert per alert window.
//! The expansion is total; queries and thresholds are never validated.

use std::collections::BTreeMap;

use crate::models::{AlertRule, GeneratedRules, RecordingRule, SloInput};
use crate::naming::{SeriesNamer, SloSeries};
use crate::windows::{
    ALERT_WINDOWS, AlertWindow, BASE_WINDOW, LONG_WINDOWS, RANGE_PLACEHOLDER, SHORT_WINDOWS,
    ratio_windows,
};


pub const RECORDING_RULES_PER_SLO: usize =
    2 * SHORT_WINDOWS.len() + 3 * LONG_WINDOWS.len() + SHORT_WINDOWS.len() + LONG_WINDOWS.len();
pub const ALERT_RULES_PER_SLO: usize = ALERT_WINDOWS.len();

const LONG_WINDOW_SERIES: [SloSeries; 3] = [
    SloSeries::SuccessfulRequests,
    SloSeries::Requests,
    SloSeries::SuccessPerRequest,
];

#[must_use]
pub fn generate_rules(input: &SloInput) -> GeneratedRules {
    let namer = SeriesNamer::for_input(input);

    let mut recording = Vec::with_capacity(RECORDING_RULES_PER_SLO);
    push_base_rate_rules(&mut recording, input, &namer);
    push_long_window_rules(&mut recording, &namer);
    push_ratio_rules(&mut recording, &namer);

    let alerts = ALERT_WINDOWS
        .iter()
        .map(|window| alert_rule(input, &namer, window))
        .collect();

    GeneratedRules { recording, alerts }
}

/// Replaces every occurrence of the range placeholder, not just the first.
#[must_use]
pub fn substitute_range(query: &str, window: &str) -> String {
    query.replace(RANGE_PLACEHOLDER, window)
}

fn push_base_rate_rules(out: &mut Vec<RecordingRule>, input: &SloInput, namer: &SeriesNamer<'_>) {
    for window in SHORT_WINDOWS {
        out.push(RecordingRule {
            record: namer.rate(SloSeries::SuccessfulRequests, window),
            expr: substitute_range(&input.success_query, window),
        });
        out.push(RecordingRule {
            record: namer.rate(SloSeries::Requests, window),
            expr: substitute_range(&input.total_query, window),
        });
    }
}

// Long windows are averages of the base window series, never raw queries.
fn push_long_window_rules(out: &mut Vec<RecordingRule>, namer: &SeriesNamer<'_>) {
    for window in LONG_WINDOWS {
        for series in LONG_WINDOW_SERIES {
            out.push(RecordingRule {
                record: namer.rate(series, window),
                expr: format!(
                    "avg_over_time({}[{window}])",
                    namer.rate(series, BASE_WINDOW)
                ),
            });
        }
    }
}

fn push_ratio_rules(out: &mut Vec<RecordingRule>, namer: &SeriesNamer<'_>) {
    for window in ratio_windows() {
        out.push(RecordingRule {
            record: namer.ratio_rate(window),
            expr: format!(
                "({} / {})",
                namer.rate(SloSeries::SuccessfulRequests, window),
                namer.rate(SloSeries::Requests, window)
            ),
        });
    }
}

fn alert_rule(input: &SloInput, namer: &SeriesNamer<'_>, window: &AlertWindow) -> AlertRule {
    let long = burn_rate_condition(
        namer,
        window.long_period,
        &input.threshold,
        window.burn_factor,
    );
    let short = burn_rate_condition(
        namer,
        window.short_period,
        &input.threshold,
        window.burn_factor,
    );

    AlertRule {
        alert: input.alert_name.clone(),
        expr: format!("({long} and {short})"),
        for_period: window.for_period.to_string(),
        labels: BTreeMap::from([
            ("severity".to_string(), window.severity.as_str().to_string()),
            ("period".to_string(), window.long_period.to_string()),
        ]),
        annotations: BTreeMap::from([
            ("summary".to_string(), input.alert_summary.clone()),
            ("description".to_string(), alert_description(window.long_period)),
        ]),
    }
}

/// `((1 - ratio) * 100 > (100 - threshold) * factor)`, factor with one decimal.
fn burn_rate_condition(
    namer: &SeriesNamer<'_>,
    period: &str,
    threshold: &str,
    burn_factor: f64,
) -> String {
    format!(
        "((1 - {}) * 100 > (100 - {threshold}) * {burn_factor:.1})",
        namer.ratio_rate(period)
    )
}

fn alert_description(period: &str) -> String {
    format!(
        "{{{{ $value | printf `%.2f` }}}}% of {{{{ $labels.job }}}}'s requests in the last {period} are failing or too slow to meet the SLO."
    )
}
