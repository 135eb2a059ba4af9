use std::fs;

use slogen_core::{DestinationStatus, parse_config};
use tempfile::tempdir;

use super::{check_all, generate_all, render_all, select_documents};
use crate::cli::RenderArgs;

const CONFIG: &str = r#"
slo_files:
  rules/api.yaml:
    - service: api
      slo_name: avail
      alertname: APIAvailability
      alert_summary: API availability low
      success_query: sum(rate(http_success[$__range]))
      total_query: sum(rate(http_total[$__range]))
      threshold: "99.5"
  rules/web.yaml:
    - service: web
      slo_name: latency
      alertname: WebLatency
      alert_summary: Web too slow
      success_query: sum(rate(fast[$__range]))
      total_query: sum(rate(all[$__range]))
      threshold: "99"
    - service: web
      slo_name: avail
      alertname: WebAvailability
      alert_summary: Web failing
      success_query: sum(rate(ok[$__range]))
      total_query: sum(rate(all[$__range]))
      threshold: "99.9"
"#;

#[test]
fn generate_writes_each_destination_under_output_dir() {
    let temp = tempdir().expect("tempdir");
    let config = parse_config(CONFIG).expect("config");

    let report =
        generate_all(&config, temp.path().join("slo.yaml").as_path(), Some(temp.path()))
            .expect("generate");

    assert_eq!(report.destinations.len(), 2);
    let web = &report.destinations[1];
    assert_eq!(web.destination, "rules/web.yaml");
    assert_eq!(web.groups, 2);
    assert_eq!(web.recording_rules, 50);
    assert_eq!(web.alert_rules, 8);
    assert_eq!(web.status, DestinationStatus::Written);

    let written = fs::read_to_string(temp.path().join("rules").join("web.yaml")).expect("read");
    assert!(written.contains("name: web_latency_slo"));
    assert!(written.contains("name: web_avail_slo"));
    assert!(
        written.find("web_latency_slo").expect("latency group")
            < written.find("web_avail_slo").expect("avail group")
    );
}

#[test]
fn check_reports_missing_then_up_to_date() {
    let temp = tempdir().expect("tempdir");
    let config = parse_config(CONFIG).expect("config");
    let config_path = temp.path().join("slo.yaml");

    let before = check_all(&config, &config_path, Some(temp.path())).expect("check");
    assert_eq!(before.outdated_count(), 2);
    assert!(
        before
            .destinations
            .iter()
            .all(|destination| destination.status == DestinationStatus::Missing)
    );

    generate_all(&config, &config_path, Some(temp.path())).expect("generate");
    let after = check_all(&config, &config_path, Some(temp.path())).expect("check");
    assert_eq!(after.outdated_count(), 0);
}

#[test]
fn check_flags_hand_edited_file_as_stale() {
    let temp = tempdir().expect("tempdir");
    let config = parse_config(CONFIG).expect("config");
    let config_path = temp.path().join("slo.yaml");
    generate_all(&config, &config_path, Some(temp.path())).expect("generate");

    let api = temp.path().join("rules").join("api.yaml");
    let edited = fs::read_to_string(&api).expect("read").replace("99.5", "99.0");
    fs::write(&api, edited).expect("edit");

    let report = check_all(&config, &config_path, Some(temp.path())).expect("check");
    assert_eq!(report.destinations[0].status, DestinationStatus::Stale);
    assert_eq!(report.destinations[1].status, DestinationStatus::UpToDate);
    assert_eq!(report.outdated_count(), 1);
}

#[test]
fn render_separates_destinations_with_document_markers() {
    let config = parse_config(CONFIG).expect("config");
    let mut out = Vec::new();
    render_all(&config, &RenderArgs { destination: None }, &mut out).expect("render");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("# rules/api.yaml\ngroups:\n"));
    assert!(text.contains("---\n# rules/web.yaml\ngroups:\n"));
}

#[test]
fn render_single_destination() {
    let config = parse_config(CONFIG).expect("config");
    let mut out = Vec::new();
    let args = RenderArgs {
        destination: Some("rules/web.yaml".to_string()),
    };
    render_all(&config, &args, &mut out).expect("render");

    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("# rules/web.yaml\n"));
    assert!(!text.contains("api_avail_slo"));
    assert!(!text.contains("---"));
}

#[test]
fn select_rejects_unknown_destination() {
    let config = parse_config(CONFIG).expect("config");
    let err = select_documents(&config, Some("rules/missing.yaml")).expect_err("must fail");
    assert!(err.to_string().contains("rules/missing.yaml"));
}
