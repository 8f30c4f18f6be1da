use crate::controller::ViewController;
use crate::model::{key_all, Keyed, RocPrResponse, XYPoint};
use crate::prelude::ApiResult;
use log::warn;

pub const FETCH_ERROR: &str = "Failed to fetch ROC/PR";

/// State of the ROC & PR screen.
///
/// AUC values stay `NaN` until the server reports one.
#[derive(Debug, Clone)]
pub struct RocPrController {
    roc: Vec<Keyed<XYPoint>>,
    pr: Vec<Keyed<XYPoint>>,
    roc_auc: f64,
    pr_auc: f64,
    error: Option<String>,
    loading: bool,
}

impl RocPrController {
    pub fn new() -> Self {
        Self {
            roc: Vec::new(),
            pr: Vec::new(),
            roc_auc: f64::NAN,
            pr_auc: f64::NAN,
            error: None,
            loading: false,
        }
    }

    pub fn roc(&self) -> &[Keyed<XYPoint>] {
        &self.roc
    }

    pub fn pr(&self) -> &[Keyed<XYPoint>] {
        &self.pr
    }

    pub fn roc_auc(&self) -> f64 {
        self.roc_auc
    }

    pub fn pr_auc(&self) -> f64 {
        self.pr_auc
    }

    /// `ROC AUC: 0.870`, shown only once the ROC curve has points.
    pub fn roc_auc_caption(&self) -> Option<String> {
        auc_caption("ROC AUC", &self.roc, self.roc_auc)
    }

    /// `PR AUC: 0.912`, shown only once the PR curve has points.
    pub fn pr_auc_caption(&self) -> Option<String> {
        auc_caption("PR AUC", &self.pr, self.pr_auc)
    }
}

fn auc_caption(label: &str, points: &[Keyed<XYPoint>], auc: f64) -> Option<String> {
    if points.is_empty() {
        None
    } else {
        Some(format!("{label}: {auc:.3}"))
    }
}

impl Default for RocPrController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController for RocPrController {
    type Request = ();
    type Response = RocPrResponse;

    fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish_load(&mut self, outcome: ApiResult<RocPrResponse>) {
        match outcome {
            Ok(response) => {
                self.roc = key_all(response.roc.points);
                self.pr = key_all(response.pr.points);
                self.roc_auc = response.roc.auc.unwrap_or(f64::NAN);
                self.pr_auc = response.pr.auc.unwrap_or(f64::NAN);
                self.error = None;
            }
            Err(err) => {
                warn!("roc/pr load failed: {err}");
                self.roc = Vec::new();
                self.pr = Vec::new();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Curve;
    use crate::prelude::ApiError;

    fn curve(len: usize, auc: Option<f64>) -> Curve {
        Curve {
            points: (0..len)
                .map(|i| {
                    let x = i as f64 / len.max(1) as f64;
                    XYPoint { x, y: x.sqrt() }
                })
                .collect(),
            auc,
        }
    }

    #[test]
    fn captions_hidden_before_first_load() {
        let controller = RocPrController::new();
        assert!(controller.roc_auc().is_nan());
        assert_eq!(controller.roc_auc_caption(), None);
        assert_eq!(controller.pr_auc_caption(), None);
    }

    #[test]
    fn missing_pr_auc_renders_as_nan() {
        let mut controller = RocPrController::new();
        controller.begin_load();
        assert!(controller.is_loading());
        controller.finish_load(Ok(RocPrResponse {
            roc: curve(11, Some(0.87)),
            pr: curve(7, None),
        }));

        assert!(!controller.is_loading());
        assert_eq!(controller.roc().len(), 11);
        assert_eq!(controller.pr().len(), 7);
        assert_eq!(controller.roc_auc_caption().as_deref(), Some("ROC AUC: 0.870"));
        assert!(controller.pr_auc().is_nan());
        assert_eq!(controller.pr_auc_caption().as_deref(), Some("PR AUC: NaN"));
    }

    #[test]
    fn empty_curve_suppresses_its_caption() {
        let mut controller = RocPrController::new();
        controller.finish_load(Ok(RocPrResponse {
            roc: curve(3, Some(0.5)),
            pr: curve(0, Some(0.4)),
        }));
        assert!(controller.roc_auc_caption().is_some());
        assert_eq!(controller.pr_auc_caption(), None);
    }

    #[test]
    fn failure_clears_both_curves_and_captions() {
        let mut controller = RocPrController::new();
        controller.finish_load(Ok(RocPrResponse {
            roc: curve(3, Some(0.9)),
            pr: curve(3, Some(0.8)),
        }));
        controller.begin_load();
        controller.finish_load(Err(ApiError::Status(502)));

        assert_eq!(controller.error(), Some(FETCH_ERROR));
        assert!(controller.roc().is_empty());
        assert!(controller.pr().is_empty());
        assert_eq!(controller.roc_auc_caption(), None);
        assert_eq!(controller.pr_auc_caption(), None);
        assert!(!controller.is_loading());
    }

    #[test]
    fn out_of_order_completions_keep_the_last_applied() {
        let mut controller = RocPrController::new();
        controller.begin_load();
        controller.begin_load();
        controller.finish_load(Ok(RocPrResponse {
            roc: curve(4, Some(0.6)),
            pr: curve(4, Some(0.6)),
        }));
        controller.finish_load(Err(ApiError::Transport("reset".into())));

        assert!(controller.roc().is_empty());
        assert_eq!(controller.error(), Some(FETCH_ERROR));
    }
}
