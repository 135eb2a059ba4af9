//! Fixed window and burn-rate tables for multiwindow, multi-burn-rate alerting.

/// Token in `success_query` / `total_query` replaced by each short window.
pub const RANGE_PLACEHOLDER: &str = "$__range";

/// Windows computed directly from the raw queries.
pub const SHORT_WINDOWS: [&str; 3] = ["5m", "30m", "1h"];

/// Windows derived by averaging the `BASE_WINDOW` series over time.
pub const LONG_WINDOWS: [&str; 4] = ["2h", "6h", "1d", "3d"];

/// Short window the long windows are averaged from. Must be in `SHORT_WINDOWS`.
pub const BASE_WINDOW: &str = "1h";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertWindow {
    pub long_period: &'static str,
    pub short_period: &'static str,
    pub for_period: &'static str,
    pub burn_factor: f64,
    pub severity: Severity,
}

pub const ALERT_WINDOWS: [AlertWindow; 4] = [
    AlertWindow {
        long_period: "1h",
        short_period: "5m",
        for_period: "2m",
        burn_factor: 14.4,
        severity: Severity::Critical,
    },
    AlertWindow {
        long_period: "6h",
        short_period: "30m",
        for_period: "15m",
        burn_factor: 6.0,
        severity: Severity::Critical,
    },
    AlertWindow {
        long_period: "1d",
        short_period: "2h",
        for_period: "1h",
        burn_factor: 3.0,
        severity: Severity::Warning,
    },
    AlertWindow {
        long_period: "3d",
        short_period: "6h",
        for_period: "3h",
        burn_factor: 1.0,
        severity: Severity::Warning,
    },
];

/// Every window that gets a `ratio_rate` series: short windows, then long.
pub fn ratio_windows() -> impl Iterator<Item = &'static str> {
    SHORT_WINDOWS.iter().chain(LONG_WINDOWS.iter()).copied()
}
