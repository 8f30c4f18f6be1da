pub mod metrics;
pub mod roc_pr;

pub use metrics::{MetricsBody, MetricsController, SeriesChoice, SERIES_CHOICES};
pub use roc_pr::RocPrController;

use crate::prelude::ApiResult;

/// Per-screen state driven by one fetch at a time.
///
/// A load is split into `begin_load`, which flips the screen into its
/// loading state and hands back what to request, and `finish_load`, which
/// applies the outcome and always leaves the screen idle. Overlapping loads
/// are not guarded: whichever outcome is applied last wins.
pub trait ViewController {
    type Request;
    type Response;

    fn begin_load(&mut self) -> Self::Request;
    fn finish_load(&mut self, outcome: ApiResult<Self::Response>);
    fn is_loading(&self) -> bool;
    fn error(&self) -> Option<&str>;
}
