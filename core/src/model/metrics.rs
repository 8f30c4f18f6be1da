use serde::{Deserialize, Serialize};

/// One sample of a scalar series at position `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub t: f64,
    pub y: f64,
}

/// Body of `GET /api/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub series: String,
    pub points: Vec<MetricPoint>,
}

/// Parameters of one metrics request.
///
/// Values are passed to the server as-is; range limits live in the UI only.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsQuery {
    pub kind: String,
    pub sample_count: u32,
    pub noise: f64,
}

impl MetricsQuery {
    pub fn new(kind: impl Into<String>, sample_count: u32, noise: f64) -> Self {
        Self {
            kind: kind.into(),
            sample_count,
            noise,
        }
    }

    /// Query pairs in wire order: `kind`, `n`, `noise`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("kind", self.kind.clone()),
            ("n", self.sample_count.to_string()),
            ("noise", self.noise.to_string()),
        ]
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    }

    proptest! {
        #[test]
        fn prop_metrics_response_round_trips(
            series in ".*",
            points in prop::collection::vec((finite(), finite()), 0..64)
        ) {
            let original = MetricsResponse {
                series,
                points: points.into_iter().map(|(t, y)| MetricPoint { t, y }).collect(),
            };
            let encoded = serde_json::to_string(&original).unwrap();
            let decoded: MetricsResponse = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(decoded, original);
        }
    }
}
