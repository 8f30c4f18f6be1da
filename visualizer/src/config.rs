use anyhow::Context;
use chartcore::api::DEFAULT_BASE_URL;
use chartcore::controller::metrics::{DEFAULT_KIND, DEFAULT_NOISE, DEFAULT_SAMPLE_COUNT};
use chartcore::MetricsController;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Viewer settings: where the metrics API lives and the initial metrics controls.
///
/// Fields missing from a YAML file keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub base_url: String,
    pub kind: String,
    pub sample_count: u32,
    pub noise: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            kind: DEFAULT_KIND.into(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            noise: DEFAULT_NOISE,
        }
    }
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading viewer config {}", path_ref.display()))?;
        let config: ViewerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing viewer config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line values on top of the file or default values.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        kind: Option<String>,
        sample_count: Option<u32>,
        noise: Option<f64>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(sample_count) = sample_count {
            self.sample_count = sample_count;
        }
        if let Some(noise) = noise {
            self.noise = noise;
        }
        self
    }

    pub fn metrics_controller(&self) -> MetricsController {
        MetricsController::new(self.kind.clone(), self.sample_count, self.noise)
    }
}
