use crate::controller::ViewController;
use crate::model::{key_all, Keyed, MetricPoint, MetricsQuery, MetricsResponse};
use crate::prelude::ApiResult;
use log::warn;
use std::fmt;
use std::ops::RangeInclusive;

pub const FETCH_ERROR: &str = "Failed to fetch metrics";

pub const DEFAULT_KIND: &str = "sine";
pub const DEFAULT_SAMPLE_COUNT: u32 = 300;
pub const DEFAULT_NOISE: f64 = 0.05;

pub const SAMPLE_COUNT_RANGE: RangeInclusive<u32> = 50..=2000;
pub const SAMPLE_COUNT_STEP: u32 = 50;
pub const NOISE_RANGE: RangeInclusive<f64> = 0.0..=0.5;
pub const NOISE_STEP: f64 = 0.01;

/// A series kind offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesChoice {
    pub label: &'static str,
    pub kind: &'static str,
}

impl fmt::Display for SeriesChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Kinds the picker offers. The server may understand more.
pub const SERIES_CHOICES: &[SeriesChoice] = &[
    SeriesChoice { label: "Sine", kind: "sine" },
    SeriesChoice { label: "Cosine", kind: "cosine" },
    SeriesChoice { label: "Ramp", kind: "ramp" },
    SeriesChoice { label: "Random", kind: "random" },
];

/// What the metrics screen body shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricsBody<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Chart(&'a [Keyed<MetricPoint>]),
}

/// State of the metrics screen.
#[derive(Debug, Clone)]
pub struct MetricsController {
    kind: String,
    sample_count: u32,
    noise: f64,
    points: Vec<Keyed<MetricPoint>>,
    error: Option<String>,
    loading: bool,
}

impl MetricsController {
    pub fn new(kind: impl Into<String>, sample_count: u32, noise: f64) -> Self {
        Self {
            kind: kind.into(),
            sample_count,
            noise,
            points: Vec::new(),
            error: None,
            loading: false,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    pub fn points(&self) -> &[Keyed<MetricPoint>] {
        &self.points
    }

    /// The picker entry matching the current kind, if it is one of the offered ones.
    pub fn selected_choice(&self) -> Option<SeriesChoice> {
        SERIES_CHOICES
            .iter()
            .find(|choice| choice.kind == self.kind)
            .copied()
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_sample_count(&mut self, sample_count: u32) {
        self.sample_count = sample_count;
    }

    pub fn set_noise(&mut self, noise: f64) {
        self.noise = noise;
    }

    pub fn query(&self) -> MetricsQuery {
        MetricsQuery::new(self.kind.clone(), self.sample_count, self.noise)
    }

    pub fn body(&self) -> MetricsBody<'_> {
        if self.loading {
            MetricsBody::Loading
        } else if let Some(error) = &self.error {
            MetricsBody::Failed(error)
        } else if self.points.is_empty() {
            MetricsBody::Empty
        } else {
            MetricsBody::Chart(&self.points)
        }
    }
}

impl Default for MetricsController {
    fn default() -> Self {
        Self::new(DEFAULT_KIND, DEFAULT_SAMPLE_COUNT, DEFAULT_NOISE)
    }
}

impl ViewController for MetricsController {
    type Request = MetricsQuery;
    type Response = MetricsResponse;

    fn begin_load(&mut self) -> MetricsQuery {
        self.loading = true;
        self.error = None;
        self.query()
    }

    fn finish_load(&mut self, outcome: ApiResult<MetricsResponse>) {
        match outcome {
            Ok(response) => {
                self.points = key_all(response.points);
                self.error = None;
            }
            Err(err) => {
                warn!("metrics load failed: {err}");
                self.points = Vec::new();
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
