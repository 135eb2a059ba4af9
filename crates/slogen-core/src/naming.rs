use crate::models::SloInput;

const SERIES_PREFIX: &str = "cluster_namespace";

/// Metric families recorded for every SLO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SloSeries {
    SuccessfulRequests,
    Requests,
    SuccessPerRequest,
}

impl SloSeries {
    #[must_use]
    pub const fn metric(self) -> &'static str {
        match self {
            Self::SuccessfulRequests => "successful_requests_total",
            Self::Requests => "requests_total",
            Self::SuccessPerRequest => "success_per_request",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Rate,
    RatioRate,
}

impl Aggregation {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::RatioRate => "ratio_rate",
        }
    }
}

/// Builds every series and group name for one `(service, slo_name)` pair.
#[derive(Debug, Clone, Copy)]
pub struct SeriesNamer<'a> {
    service: &'a str,
    slo_name: &'a str,
}

impl<'a> SeriesNamer<'a> {
    #[must_use]
    pub fn new(service: &'a str, slo_name: &'a str) -> Self {
        Self { service, slo_name }
    }

    #[must_use]
    pub fn for_input(input: &'a SloInput) -> Self {
        Self::new(&input.service, &input.slo_name)
    }

    /// `cluster_namespace:<service>_<slo>_<metric>:<aggregation><window>`
    #[must_use]
    pub fn series(&self, series: SloSeries, aggregation: Aggregation, window: &str) -> String {
        format!(
            "{SERIES_PREFIX}:{}_{}_{}:{}{window}",
            self.service,
            self.slo_name,
            series.metric(),
            aggregation.prefix()
        )
    }

    #[must_use]
    pub fn rate(&self, series: SloSeries, window: &str) -> String {
        self.series(series, Aggregation::Rate, window)
    }

    #[must_use]
    pub fn ratio_rate(&self, window: &str) -> String {
        self.series(SloSeries::SuccessPerRequest, Aggregation::RatioRate, window)
    }

    #[must_use]
    pub fn group_name(&self) -> String {
        format!("{}_{}_slo", self.service, self.slo_name)
    }
}
