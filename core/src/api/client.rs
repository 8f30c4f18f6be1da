use crate::model::{MetricsQuery, MetricsResponse, RocPrResponse};
use crate::prelude::{ApiError, ApiResult};
use crate::telemetry::FetchStats;
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Loopback address of the metrics API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const METRICS_PATH: &str = "/api/metrics";
const ROC_PR_PATH: &str = "/api/metrics/roc_pr";

/// Thin JSON-over-HTTP client for the metrics API.
///
/// Every call performs a fresh request: no retries, no caching, and no
/// timeout beyond the transport's defaults. Clones share the connection pool
/// and the request counters.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    stats: Arc<FetchStats>,
}

impl ApiClient {
    /// Accepts only `http`/`https` base URLs that can carry a path.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::MalformedUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::MalformedUrl(format!(
                "{base_url}: expected an http or https base url"
            )));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(format!("building http client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            stats: Arc::new(FetchStats::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// `GET /api/metrics?kind=..&n=..&noise=..`
    pub async fn fetch_metrics(&self, query: &MetricsQuery) -> ApiResult<MetricsResponse> {
        self.get(METRICS_PATH, &query.to_pairs()).await
    }

    /// `GET /api/metrics/roc_pr`
    pub async fn fetch_roc_pr(&self) -> ApiResult<RocPrResponse> {
        self.get(ROC_PR_PATH, &[]).await
    }

    /// Joins the base URL and `path`, appending a query string only when
    /// `query` is non-empty.
    pub fn build_url(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url =
            Url::parse(&joined).map_err(|e| ApiError::MalformedUrl(format!("{joined}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Performs a GET and decodes the body as `T`.
    ///
    /// A response is either fully decoded or rejected; there is no partial
    /// result.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.stats.record_request();
        let outcome = match self.build_url(path, query) {
            Ok(url) => self.execute(url).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            self.stats.record_failure();
            warn!("GET {path} failed: {err}");
        }
        outcome
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ApiError::MalformedUrl(e.to_string())
                } else {
                    ApiError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn kind() -> impl Strategy<Value = String> {
        prop_oneof![".*", "[a-z &=+%?#/é日]{0,16}"]
    }

    fn noise() -> impl Strategy<Value = f64> {
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    }

    proptest! {
        #[test]
        fn prop_metrics_url_decodes_to_exactly_the_query(
            kind in kind(),
            n in any::<u32>(),
            noise in noise()
        ) {
            let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
            let query = MetricsQuery::new(kind.clone(), n, noise);
            let url = client.build_url(METRICS_PATH, &query.to_pairs()).unwrap();

            let decoded: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let expected = vec![
                ("kind".to_string(), kind),
                ("n".to_string(), n.to_string()),
                ("noise".to_string(), noise.to_string()),
            ];
            prop_assert_eq!(decoded, expected);
            prop_assert_eq!(url.path(), "/api/metrics");
        }
    }
}
