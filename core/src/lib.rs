//! Client core for the minimal ML charts viewer.
//!
//! The modules cover the wire model served by the local metrics API, a thin
//! HTTP client with a small error taxonomy, and the per-screen view-state
//! controllers that the GUI renders from.

pub mod api;
pub mod controller;
pub mod math;
pub mod model;
pub mod prelude;
pub mod telemetry;

pub use api::ApiClient;
pub use controller::{MetricsController, RocPrController, ViewController};
pub use prelude::{ApiError, ApiResult};
