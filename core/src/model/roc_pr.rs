use serde::{Deserialize, Serialize};

/// One point on a ROC or PR curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XYPoint {
    pub x: f64,
    pub y: f64,
}

/// A curve and its area-under-curve, when the server computed one.
///
/// A missing `auc` field and an explicit `null` both decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub points: Vec<XYPoint>,
    #[serde(default)]
    pub auc: Option<f64>,
}

/// Body of `GET /api/metrics/roc_pr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocPrResponse {
    pub roc: Curve,
    pub pr: Curve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_auc_decode_to_none() {
        let body = r#"{
            "roc": {"points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}], "auc": null},
            "pr": {"points": [{"x": 0.0, "y": 1.0}]}
        }"#;
        let decoded: RocPrResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.roc.auc, None);
        assert_eq!(decoded.pr.auc, None);
        assert_eq!(decoded.roc.points.len(), 2);
    }

    #[test]
    fn response_round_trips_exactly() {
        let original = RocPrResponse {
            roc: Curve {
                points: vec![
                    XYPoint { x: 0.0, y: 0.0 },
                    XYPoint { x: 0.1, y: 0.7 },
                    XYPoint { x: 1.0, y: 1.0 },
                ],
                auc: Some(0.87),
            },
            pr: Curve {
                points: vec![XYPoint { x: 0.3333333333333333, y: 0.9 }],
                auc: None,
            },
        };
        let encoded = serde_json::to_string(&original).unwrap();
        assert!(encoded.contains(r#""auc":null"#));
        let decoded: RocPrResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn wrong_point_shape_is_rejected() {
        let body = r#"{"roc": {"points": [{"t": 0.0, "y": 0.0}]}, "pr": {"points": []}}"#;
        assert!(serde_json::from_str::<RocPrResponse>(body).is_err());
    }
}
