//! Compiles compact SLO declarations into Prometheus recording and alerting
//! rules following the multiwindow, multi-burn-rate method.

// Public fallible APIs in this crate share one concrete error contract (`SlogenError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod naming;
pub mod sink;
pub mod windows;

pub use assemble::{assemble_document, assemble_group, assemble_groups};
pub use config::{SloConfig, load_config, parse_config, resolve_config_path, validate_config};
pub use error::{Result, SlogenError};
pub use generate::generate_rules;
pub use models::{AlertRule, GeneratedRules, RecordingRule, Rule, RuleDocument, RuleGroup, SloInput};
pub use sink::{
    DestinationStatus, check_document, render_document, resolve_destination, write_document,
};
